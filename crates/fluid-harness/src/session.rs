// Scripted sessions
//
// Replays what the app's render loop does: init once, then a burst of
// touches and a frame tick per iteration.

use fluid_engine::{BackendKind, EngineHost, FrameStats};

/// Packed ARGB colors the app cycles through for finger trails.
const PALETTE: [u32; 4] = [0xFF29_B6F6, 0xFFAB_47BC, 0xFFFF_7043, 0xFF66_BB6A];

#[derive(Debug, Clone)]
pub struct SessionPlan {
    pub width: i32,
    pub height: i32,
    pub prefer_vulkan: bool,
    pub frames: u32,
    pub touches_per_frame: u32,
    pub dt: f32,
    pub ai_strength: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub backend: Option<BackendKind>,
    pub stats: FrameStats,
    pub touches_sent: u64,
    pub ai_strength: f32,
}

/// Touch `index` of frame `frame`: points walk around a circle centred on
/// the canvas, moving tangentially.
pub fn synthetic_touch(plan: &SessionPlan, frame: u32, index: u32) -> (f32, f32, f32, f32, i32) {
    let cx = plan.width as f32 / 2.0;
    let cy = plan.height as f32 / 2.0;
    let radius = cx.min(cy) * 0.5;
    let steps = (plan.frames * plan.touches_per_frame).max(1) as f32;
    let angle = (frame * plan.touches_per_frame + index) as f32 / steps * std::f32::consts::TAU;
    let (sin, cos) = angle.sin_cos();
    let color = PALETTE[(frame as usize + index as usize) % PALETTE.len()];
    (cx + radius * cos, cy + radius * sin, -sin, cos, color as i32)
}

pub fn run(host: &EngineHost, plan: &SessionPlan) -> SessionReport {
    host.init(plan.width, plan.height, plan.prefer_vulkan);
    if let Some(strength) = plan.ai_strength {
        host.set_ai_strength(strength);
    }

    let mut touches_sent = 0;
    for frame in 0..plan.frames {
        for index in 0..plan.touches_per_frame {
            let (x, y, dx, dy, color) = synthetic_touch(plan, frame, index);
            host.touch(x, y, dx, dy, color);
            touches_sent += 1;
        }
        host.frame(plan.dt);
    }

    let controller = host.controller();
    SessionReport {
        backend: controller.backend_kind(),
        stats: controller.stats(),
        touches_sent,
        ai_strength: controller.ai_strength(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluid_engine::EngineConfig;
    use fluid_engine::backend::{Capabilities, PlatformFactory};
    use fluid_engine::diagnostics::RecordingSink;
    use std::sync::Arc;

    fn plan() -> SessionPlan {
        SessionPlan {
            width: 200,
            height: 100,
            prefer_vulkan: true,
            frames: 10,
            touches_per_frame: 2,
            dt: 0.02,
            ai_strength: Some(0.4),
        }
    }

    #[test]
    fn first_touch_starts_on_the_right_of_centre() {
        let (x, y, dx, dy, color) = synthetic_touch(&plan(), 0, 0);
        assert_eq!((x, y), (125.0, 50.0));
        assert_eq!((dx, dy), (-0.0, 1.0));
        assert_eq!(color as u32, PALETTE[0]);
    }

    #[test]
    fn session_runs_on_opengl_off_device() {
        let factory = PlatformFactory::new(Capabilities {
            vulkan: false,
            opengl: true,
        });
        let host = EngineHost::new(
            &EngineConfig::default(),
            Box::new(factory),
            Arc::new(RecordingSink::new()),
        );

        let report = run(&host, &plan());

        assert_eq!(report.backend, Some(BackendKind::OpenGl));
        assert_eq!(report.stats.frames, 10);
        assert_eq!(report.touches_sent, 20);
        assert_eq!(report.ai_strength, 0.4);
        assert!(host.controller().pending_emitters().is_empty());
    }
}
