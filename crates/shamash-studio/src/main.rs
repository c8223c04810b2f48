//! Headless demo: a draggable sun whose rays are blocked by orbiting planets.
//!
//! Stands in for a real window harness: a scripted pointer-event sequence is
//! fed through the dispatcher with a synthetic monotonic clock, the planets
//! advance on their orbits each frame, and selected frames are dumped as
//! binary PPM images next to the working directory.

use std::path::PathBuf;

use anyhow::{Context, Result};

use shamash_engine::coords::Vec2;
use shamash_engine::event::{Dispatcher, MouseButton, PointerEvent};
use shamash_engine::logging;
use shamash_engine::rays::{Occluder, RayConfig, RayField};
use shamash_engine::scene::{Scene, ShapeId, ShapeKind, ShapeOptions};
use shamash_engine::surface::Framebuffer;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;
const FRAME_MS: u64 = 16;
const FRAMES: u64 = 181;
/// Every Nth frame is written to disk.
const DUMP_EVERY: u64 = 60;

const SKY: u32 = 0x0b1026;
const SUN: u32 = 0xffd54a;
const SUN_HIGHLIGHT: u32 = 0xfff7d6;
const RAY: u32 = 0x6b5c22;

struct Planet {
    id: ShapeId,
    orbit_radius: f64,
    /// Radians per frame.
    angular_speed: f64,
    phase: f64,
}

fn main() -> Result<()> {
    logging::init_logging(None);

    println!();
    println!("  ┌──────────────────────────────────────┐");
    println!("  │       SHAMASH ORBITAL STUDIO         │");
    println!("  │   one sun · three planets · rays     │");
    println!("  └──────────────────────────────────────┘");
    println!();

    let mut scene = Scene::with_seed(0x5ca1ab1e);

    let sun = scene.add_circle(
        400.0,
        300.0,
        48.0,
        SUN,
        ShapeOptions::new()
            .selectable(true)
            .draggable(true)
            .clickable(true)
            .z_order(10)
            .highlight_color(SUN_HIGHLIGHT)
            .on_click(|shape, ev| {
                log::info!("{} clicked at ({:.0}, {:.0})", shape.kind_name(), ev.x, ev.y)
            })
            .on_double_click(|shape, _| {
                shape.set_selected(!shape.is_selected());
                log::info!("sun selection toggled: {}", shape.is_selected());
            })
            .on_hover(|_, ev| log::debug!("pointer over the sun ({:.0}, {:.0})", ev.x, ev.y)),
    );

    let planets = spawn_planets(&mut scene);

    // Backdrop props: not interactive, just scene furniture under the rays.
    scene.add_rect(120.0, 560.0, 160.0, 40.0, 0x1c2742, ShapeOptions::new().z_order(-5));
    scene.add_triangle(
        Vec2::new(640.0, 600.0),
        Vec2::new(800.0, 600.0),
        Vec2::new(740.0, 470.0),
        0x18203a,
        ShapeOptions::new().z_order(-5),
    );

    let mut dispatcher = Dispatcher::new();
    let mut rays = RayField::new(RayConfig::default());
    let mut frame = Framebuffer::new(WIDTH, HEIGHT);

    let mut script = script();
    script.reverse(); // pop from the back in time order

    for index in 0..FRAMES {
        let now_ms = index * FRAME_MS;

        while let Some((at, event)) = script.pop_if(|(at, _)| *at <= now_ms) {
            dispatcher.handle_event(&mut scene, event, at);
        }

        advance_orbits(&mut scene, &planets, sun, index);

        let sun_center = scene
            .get(sun)
            .map(|s| s.position())
            .unwrap_or(Vec2::new(WIDTH as f64 / 2.0, HEIGHT as f64 / 2.0));
        rays.regenerate(sun_center);

        frame.clear(SKY);
        rays.trace(&mut frame, &occluders(&scene, &planets), RAY);
        scene.draw_all(&mut frame);

        if index % DUMP_EVERY == 0 {
            let path = PathBuf::from(format!("shamash-frame-{index:04}.ppm"));
            write_ppm(&path, &frame)?;
            log::info!("wrote {}", path.display());
        }
    }

    println!("  done: {FRAMES} frames simulated.");
    Ok(())
}

fn spawn_planets(scene: &mut Scene) -> Vec<Planet> {
    let specs: [(f64, u32, f64, f64, f64); 3] = [
        // (radius, color, orbit radius, radians/frame, phase)
        (14.0, 0x4a90d9, 110.0, 0.031, 0.0),
        (20.0, 0xc25b4a, 180.0, 0.019, 2.1),
        (11.0, 0x7a9e68, 250.0, 0.013, 4.4),
    ];

    specs
        .iter()
        .map(|&(radius, color, orbit_radius, angular_speed, phase)| {
            let id = scene.add_circle(
                0.0,
                0.0,
                radius,
                color,
                ShapeOptions::new().z_order(5).on_hover(|shape, _| {
                    log::debug!("pointer over a planet ({})", shape.kind_name())
                }),
            );
            Planet { id, orbit_radius, angular_speed, phase }
        })
        .collect()
}

/// Orbital motion is application-owned: the engine only sees the resulting
/// `set_position` calls.
fn advance_orbits(scene: &mut Scene, planets: &[Planet], sun: ShapeId, frame_index: u64) {
    let Some(center) = scene.get(sun).map(|s| s.position()) else {
        return;
    };
    for planet in planets {
        let angle = planet.phase + planet.angular_speed * frame_index as f64;
        let pos = center + Vec2::from_angle(angle) * planet.orbit_radius;
        if let Some(shape) = scene.get_mut(planet.id) {
            shape.set_position(pos.x, pos.y);
        }
    }
}

fn occluders(scene: &Scene, planets: &[Planet]) -> Vec<Occluder> {
    planets
        .iter()
        .filter_map(|planet| {
            let shape = scene.get(planet.id)?;
            match *shape.kind() {
                ShapeKind::Circle { radius } => Some(Occluder::new(shape.position(), radius)),
                _ => None,
            }
        })
        .collect()
}

/// The scripted pointer input, in monotonic-time order: hover across the
/// scene, drag the sun down-right, then double-click it to toggle selection.
fn script() -> Vec<(u64, PointerEvent)> {
    let left = MouseButton::Left;
    vec![
        // Sweep the pointer toward the sun.
        (200, PointerEvent::Motion { x: 320.0, y: 260.0, dx: 12.0, dy: 4.0 }),
        (230, PointerEvent::Motion { x: 380.0, y: 290.0, dx: 60.0, dy: 30.0 }),
        // Grab the sun and drag it down-right by (40, 20).
        (400, PointerEvent::ButtonDown { button: left, x: 400.0, y: 300.0 }),
        (450, PointerEvent::Motion { x: 410.0, y: 305.0, dx: 10.0, dy: 5.0 }),
        (500, PointerEvent::Motion { x: 425.0, y: 312.0, dx: 15.0, dy: 7.0 }),
        (550, PointerEvent::Motion { x: 440.0, y: 320.0, dx: 15.0, dy: 8.0 }),
        (600, PointerEvent::ButtonUp { button: left, x: 440.0, y: 320.0 }),
        // Double-click the sun at its new center to toggle the highlight.
        (1200, PointerEvent::ButtonDown { button: left, x: 440.0, y: 320.0 }),
        (1260, PointerEvent::ButtonUp { button: left, x: 440.0, y: 320.0 }),
        (1320, PointerEvent::ButtonDown { button: left, x: 440.0, y: 320.0 }),
        (1380, PointerEvent::ButtonUp { button: left, x: 440.0, y: 320.0 }),
        // Wander off into empty space.
        (2000, PointerEvent::Motion { x: 700.0, y: 120.0, dx: 260.0, dy: -200.0 }),
    ]
}

/// Binary PPM (P6). The studio treats scene colors as 0xRRGGBB.
fn write_ppm(path: &PathBuf, frame: &Framebuffer) -> Result<()> {
    let mut out = Vec::with_capacity(32 + frame.pixels().len() * 3);
    out.extend_from_slice(format!("P6\n{WIDTH} {HEIGHT}\n255\n").as_bytes());
    for &pixel in frame.pixels() {
        out.push((pixel >> 16) as u8);
        out.push((pixel >> 8) as u8);
        out.push(pixel as u8);
    }
    std::fs::write(path, &out).with_context(|| format!("writing {}", path.display()))
}
