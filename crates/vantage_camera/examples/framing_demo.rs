//! Framing Demo
//!
//! Drives the camera director through a scripted arena sequence:
//! - Fixed: locked orthographic view of the arena
//! - TargetOne: track the player as they move
//! - TargetAll: frame the player and two hazards as a group
//!
//! Run with: cargo run -p vantage_camera --example framing_demo

use vantage_camera::{
    CameraDirector, CameraFrame, DisplaySurface, FramingMode, FramingTarget, ShakeTracker, Vec3,
};

const DT: f32 = 1.0 / 60.0;

/// Console "renderer": prints the camera state a few times per second
struct ConsoleSurface {
    frame_count: u32,
}

impl DisplaySurface for ConsoleSurface {
    fn apply(&mut self, frame: &CameraFrame) {
        self.frame_count += 1;
        if self.frame_count % 15 != 0 {
            return;
        }
        let projection = if frame.orthographic {
            format!("ortho size {:.2}", frame.ortho_size)
        } else {
            format!("fov {:.1}", frame.fov)
        };
        println!(
            "  pos ({:6.2}, {:6.2}, {:6.2})  {}  bg ({:.2}, {:.2}, {:.2})",
            frame.position.x,
            frame.position.y,
            frame.position.z,
            projection,
            frame.background.r,
            frame.background.g,
            frame.background.b,
        );
    }
}

fn run_for(director: &mut CameraDirector, surface: &mut ConsoleSurface, seconds: f32) {
    let ticks = (seconds / DT) as u32;
    for _ in 0..ticks {
        director.tick(DT, surface);
    }
}

fn main() -> Result<(), vantage_camera::CameraError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut shake = ShakeTracker::new();
    shake.trigger(1.0, 0.8);
    let mut director = CameraDirector::with_shake(Box::new(shake));
    let mut surface = ConsoleSurface { frame_count: 0 };

    let player = director.spawn_target(FramingTarget::new(Vec3::new(0.0, 0.0, 0.0), 1.0));
    let hazard_a = director.spawn_target(FramingTarget::new(Vec3::new(12.0, 3.0, 0.0), 2.5));
    let hazard_b = director.spawn_target(FramingTarget::new(Vec3::new(-8.0, -6.0, 0.0), 1.5));

    director.add_target(player, &[FramingMode::TargetOne, FramingMode::TargetAll]);
    director.add_target(hazard_a, &[FramingMode::TargetAll]);
    director.add_target(hazard_b, &[FramingMode::TargetAll]);

    println!("-- fixed arena view --");
    director.set_mode(FramingMode::Fixed)?;
    run_for(&mut director, &mut surface, 1.5);
    println!(
        "   shaking: {} ({:.2}s left)",
        director.is_shaking(),
        director.shake_time_left()
    );

    println!("-- tracking the player --");
    director.set_mode(FramingMode::TargetOne)?;
    director.set_selected_index(0);
    for step in 0..4 {
        if let Some(target) = director.target_mut(player) {
            target.position = Vec3::new(step as f32 * 3.0, step as f32 * 1.5, 0.0);
        }
        run_for(&mut director, &mut surface, 0.5);
    }

    println!("-- framing the whole group --");
    director.set_mode(FramingMode::TargetAll)?;
    run_for(&mut director, &mut surface, 2.0);

    println!("-- hazard destroyed, group reframes --");
    if let Some(target) = director.target_mut(hazard_a) {
        target.status.pending_destroy = true;
    }
    run_for(&mut director, &mut surface, 2.0);

    Ok(())
}
