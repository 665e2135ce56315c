//! Minimap demo application
//!
//! Runs the minimap pipeline headless: a pawn spins in the middle of a ring
//! of tracked entities while some of them are destroyed, and every frame's
//! icon placements are logged.

use minimap_engine::config::{Config, ConfigError, MinimapSettings};
use minimap_engine::ecs::components::{HealthComponent, MinimapComponent, TransformComponent};
use minimap_engine::ecs::{Entity, World};
use minimap_engine::foundation::logging;
use minimap_engine::foundation::math::{utils, Vec2, Vec3};
use minimap_engine::minimap::{MinimapHooks, MinimapManager};
use minimap_engine::render::{HeadlessIconBackend, IconMeshAsset};
use minimap_engine::ui::{MinimapIconsWidget, WidgetGeometry};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::Cell;
use std::rc::Rc;

const FRAME_COUNT: u32 = 120;
const DELTA_TIME: f32 = 1.0 / 60.0;
const RING_SIZE: usize = 12;
const RING_RADIUS: f32 = 2000.0;
const PAWN_TURN_RATE: f32 = 45.0; // degrees per second

#[derive(thiserror::Error, Debug)]
enum DemoError {
    #[error("Failed to load minimap settings: {0}")]
    Settings(#[from] ConfigError),

    #[error("Icon mesh could not be created")]
    IconMeshUnavailable,
}

struct MinimapDemoApp {
    world: World,
    manager: MinimapManager,
    backend: HeadlessIconBackend,
    widget: MinimapIconsWidget,
    geometry: WidgetGeometry,
    pawn: Entity,
    ring: Vec<Entity>,
    rng: StdRng,
    enemies_seen: Rc<Cell<usize>>,
    enemies_lost: Rc<Cell<usize>>,
}

impl MinimapDemoApp {
    fn new(settings: MinimapSettings) -> Result<Self, DemoError> {
        log::info!("Creating minimap demo with {} icon styles", settings.icon_styles.len());

        let mut manager = MinimapManager::from_settings(&settings);
        let enemies_seen = Rc::new(Cell::new(0));
        let enemies_lost = Rc::new(Cell::new(0));
        {
            let seen = Rc::clone(&enemies_seen);
            manager.on_enemy_added.subscribe(move |entity: &Entity| {
                seen.set(seen.get() + 1);
                log::info!("Enemy appeared on minimap: {:?}", entity);
            });
            let lost = Rc::clone(&enemies_lost);
            manager.on_enemy_removed.subscribe(move |entity: &Entity| {
                lost.set(lost.get() + 1);
                log::info!("Enemy left minimap: {:?}", entity);
            });
        }

        let mut backend = HeadlessIconBackend::new();
        let mut widget = MinimapIconsWidget::new(settings.widget)
            .with_icon_mesh(IconMeshAsset::new("minimap_dot", 12.0));
        widget.synchronize_properties(&mut backend);
        if !widget.mesh_handle().is_set() {
            return Err(DemoError::IconMeshUnavailable);
        }

        let mut world = World::new();
        let pawn = world.create_entity();
        world.add_component(pawn, TransformComponent::identity());

        Ok(Self {
            world,
            manager,
            backend,
            widget,
            geometry: WidgetGeometry::new(Vec2::new(20.0, 20.0), Vec2::new(256.0, 256.0), 1.0),
            pawn,
            ring: Vec::with_capacity(RING_SIZE),
            rng: StdRng::seed_from_u64(0x5eed),
            enemies_seen,
            enemies_lost,
        })
    }

    fn spawn_ring(&mut self) {
        let style_count = self.manager.icon_styles().len().max(1) as u32;
        for i in 0..RING_SIZE {
            let angle = utils::deg_to_rad(360.0 * i as f32 / RING_SIZE as f32);
            let position = Vec3::new(angle.cos() * RING_RADIUS, angle.sin() * RING_RADIUS, 0.0);

            let entity = self.world.create_entity();
            self.world
                .add_component(entity, TransformComponent::from_position_yaw(position, self.rng.gen_range(0.0..360.0)));
            self.world
                .add_component(entity, MinimapComponent::new(i as u32 % style_count));
            if self.rng.gen_bool(0.5) {
                self.world.add_component(entity, HealthComponent::new(100.0));
                MinimapHooks::health_begin_play(&mut self.world, entity, &mut self.rng, Some(&self.manager));
            }
            MinimapHooks::begin_play(&mut self.world, entity, Some(&mut self.manager));
            self.ring.push(entity);
        }
        log::info!(
            "Spawned {} entities, {} tracked as enemies",
            self.ring.len(),
            self.manager.enemy_health_components(&self.world).len()
        );
    }

    fn update(&mut self, frame: u32) {
        let yaw = self
            .world
            .get_component::<TransformComponent>(self.pawn)
            .map_or(0.0, TransformComponent::yaw_degrees);
        if let Some(transform) = self.world.get_component_mut::<TransformComponent>(self.pawn) {
            transform.rotation = utils::quat_from_yaw_degrees(yaw + PAWN_TURN_RATE * DELTA_TIME);
        }

        if frame == FRAME_COUNT / 2 {
            if let Some(victim) = self.ring.pop() {
                log::info!("Destroying {:?} mid-run", victim);
                self.world.destroy_entity(victim);
            }
        }

        let report = self.manager.tick(&self.world, DELTA_TIME);
        if report.entries_removed > 0 {
            log::info!("Frame {}: {:?}", frame, report);
        }

        let drawn = self.widget.paint(
            &self.world,
            Some(&self.manager),
            Some(self.pawn),
            &self.geometry,
            &mut self.backend,
        );
        if frame % 30 == 0 {
            log::info!("Frame {}: {} icons", frame, drawn);
            for placement in self.widget.placements() {
                log::debug!(
                    "  style {} at ({:.1}, {:.1}) rot {:.2}",
                    placement.style_index,
                    placement.screen_position.x,
                    placement.screen_position.y,
                    placement.rotation
                );
            }
        }
    }

    fn run(&mut self) {
        self.spawn_ring();
        for frame in 0..FRAME_COUNT {
            self.update(frame);
        }

        for entity in std::mem::take(&mut self.ring) {
            MinimapHooks::end_play(&mut self.world, entity, Some(&mut self.manager));
        }
        self.widget.release_resources();

        log::info!(
            "Done: {} enemies seen, {} lost, {} uploads ({} bytes)",
            self.enemies_seen.get(),
            self.enemies_lost.get(),
            self.backend.upload_count(),
            self.backend.bytes_uploaded()
        );
    }
}

fn load_settings() -> Result<MinimapSettings, DemoError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading minimap settings from {}", path);
            Ok(MinimapSettings::load_from_file(&path)?)
        }
        None => {
            log::info!("No settings file given, using defaults");
            Ok(MinimapSettings {
                icon_styles: vec!["icons/enemy.png".to_string(), "icons/pickup.png".to_string()],
                ..MinimapSettings::default()
            })
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    log::info!("Starting Minimap Demo");

    let settings = load_settings()?;
    let mut app = MinimapDemoApp::new(settings)?;
    app.run();

    log::info!("Minimap demo finished");
    Ok(())
}
