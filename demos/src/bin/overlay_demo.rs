//! # Overlay Demo
//!
//! Builds every debug-overlay category from a hand-written sample room on
//! the dummy backend and logs what was generated. Useful as a smoke test
//! and as a reference for wiring the overlay crate into a viewer.

use std::collections::HashMap;

use revenant_debug_overlay::{
    upload_overlay, CameraSwitchRegion, CollisionEntity, DebugOverlay, TriggerVolume,
};
use revenant_graphics::instance::GraphicsInstance;

fn sample_collision_entities() -> Vec<CollisionEntity> {
    vec![
        // Room walls as footprint rectangles.
        CollisionEntity {
            shape: 0,
            slope_type: 0,
            x: 0.0,
            z: 0.0,
            width: 12.0,
            density: 0.5,
            slope_height: 0.0,
        },
        CollisionEntity {
            shape: 0,
            slope_type: 0,
            x: 0.0,
            z: 9.5,
            width: 12.0,
            density: 0.5,
            slope_height: 0.0,
        },
        // A clipped corner.
        CollisionEntity {
            shape: 2,
            slope_type: 0,
            x: 0.0,
            z: 0.5,
            width: 1.5,
            density: 1.5,
            slope_height: 0.0,
        },
        // A round table and an oval rug.
        CollisionEntity {
            shape: 6,
            slope_type: 0,
            x: 5.0,
            z: 4.0,
            width: 1.2,
            density: 0.0,
            slope_height: 0.0,
        },
        CollisionEntity {
            shape: 7,
            slope_type: 0,
            x: 2.0,
            z: 6.0,
            width: 3.0,
            density: 1.5,
            slope_height: 0.0,
        },
        // A staircase along the east wall.
        CollisionEntity {
            shape: 12,
            slope_type: 0,
            x: 10.0,
            z: 2.0,
            width: 2.0,
            density: 3.0,
            slope_height: 1.8,
        },
        // A record with a shape code this viewer doesn't draw.
        CollisionEntity {
            shape: 9,
            slope_type: 0,
            x: 6.0,
            z: 6.0,
            width: 1.0,
            density: 1.0,
            slope_height: 0.0,
        },
    ]
}

fn main() {
    env_logger::init();
    revenant_graphics::init();

    let instance = GraphicsInstance::new().expect("failed to create graphics instance");
    let device = instance.create_device().expect("failed to create device");

    let entities = sample_collision_entities();
    let regions = vec![
        CameraSwitchRegion {
            x1: 3.0,
            z1: 1.0,
            x2: 3.0,
            z2: 4.0,
            x3: 6.0,
            z3: 4.0,
            x4: 6.0,
            z4: 1.0,
        },
        CameraSwitchRegion {
            x1: 8.0,
            z1: 5.0,
            x2: 8.0,
            z2: 8.0,
            x3: 11.0,
            z3: 8.0,
            x4: 11.0,
            z4: 5.0,
        },
    ];
    let transitions = HashMap::from([(0u32, vec![0usize, 1usize]), (1u32, vec![0usize])]);
    let doors = vec![TriggerVolume {
        x: 11.5,
        y: 4.0,
        width: 0.5,
        height: 2.0,
    }];
    let items = vec![
        TriggerVolume {
            x: 5.4,
            y: 4.4,
            width: 0.4,
            height: 0.4,
        },
        TriggerVolume {
            x: 1.0,
            y: 8.0,
            width: 0.6,
            height: 0.6,
        },
    ];

    let overlays = [
        ("collision", DebugOverlay::collision(&device, &entities)),
        (
            "sloped surfaces",
            DebugOverlay::sloped_surfaces(&device, &entities),
        ),
        (
            "camera switches",
            DebugOverlay::camera_switches(&device, 0, &regions, &transitions),
        ),
        ("door triggers", DebugOverlay::door_triggers(&device, &doors)),
        ("item triggers", DebugOverlay::item_triggers(&device, &items)),
    ];

    for (name, overlay) in overlays {
        match overlay {
            Ok(overlay) => {
                upload_overlay(&device, &overlay).expect("upload failed");
                log::info!(
                    "{}: {} triangles, color {:?}",
                    name,
                    overlay.triangle_count(),
                    overlay.color()
                );
            }
            Err(err) => log::error!("{}: failed to build overlay: {}", name, err),
        }
    }

    log::info!(
        "device now tracks {} buffers and {} vertex arrays",
        device.buffer_count(),
        device.vertex_array_count()
    );
}
