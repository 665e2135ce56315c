//! World → minimap screen projection
//!
//! Converts tracked entries into absolute-pixel icon placements around a
//! moving, rotating observer. Pure: reads its inputs, returns placements.
//!
//! Per entry:
//! 1. altitude filter against the observer
//! 2. planar offset from the observer, clamped to a radius
//! 3. rotation by the negative observer yaw (the map turns under the observer)
//! 4. world Y-up to screen Y-down, then optional axis flips
//! 5. world units to pixels, offset from the widget's absolute center

use crate::config::MinimapWidgetConfig;
use crate::ecs::components::TransformComponent;
use crate::ecs::{Entity, World};
use crate::foundation::math::{utils, Rotation2, Vec2, Vec3};
use crate::minimap::TrackedEntry;
use crate::ui::WidgetGeometry;

/// Zoom values below this are treated as this
pub const MIN_ZOOM: f32 = 0.001;

/// Widget widths below this many pixels are treated as this
pub const MIN_WIDGET_WIDTH_PX: f32 = 1.0;

bitflags::bitflags! {
    /// Screen-space mirroring applied after rotation
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AxisFlip: u8 {
        /// Mirror horizontally
        const X = 0b01;
        /// Mirror vertically
        const Y = 0b10;
    }
}

/// Frame of reference the minimap is drawn around
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverState {
    /// Observer world position
    pub position: Vec3,
    /// Observer heading in degrees
    pub yaw_degrees: f32,
}

impl Default for ObserverState {
    fn default() -> Self {
        Self::origin()
    }
}

impl ObserverState {
    /// Observer at the world origin facing yaw 0
    pub fn origin() -> Self {
        Self {
            position: Vec3::zeros(),
            yaw_degrees: 0.0,
        }
    }

    /// Observer at `position` facing `yaw_degrees`
    pub fn new(position: Vec3, yaw_degrees: f32) -> Self {
        Self {
            position,
            yaw_degrees,
        }
    }

    /// Observer derived from the player pawn's transform
    ///
    /// `yaw_offset_degrees` is added to the pawn's heading. Without a live
    /// pawn carrying a transform the observer sits at the origin with zero
    /// yaw.
    pub fn from_pawn(world: &World, pawn: Option<Entity>, yaw_offset_degrees: f32) -> Self {
        pawn.filter(|p| world.is_alive(*p))
            .and_then(|p| world.get_component::<TransformComponent>(p))
            .map_or_else(Self::origin, |transform| {
                Self::new(transform.position, transform.yaw_degrees() + yaw_offset_degrees)
            })
    }
}

/// Screen-space result for one entry in one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconPlacement {
    /// Absolute screen position in pixels
    pub screen_position: Vec2,
    /// Icon rotation in radians
    pub rotation: f32,
    /// Atlas / style index
    pub style_index: u32,
}

/// Where on screen the minimap is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionViewport {
    /// Widget center in absolute pixels
    pub center: Vec2,
    /// Widget width in absolute pixels
    pub width_px: f32,
}

impl ProjectionViewport {
    /// Viewport from the widget's absolute (DPI-scaled) bounds
    pub fn from_geometry(geometry: &WidgetGeometry) -> Self {
        Self {
            center: geometry.absolute_center(),
            width_px: geometry.absolute_size().x,
        }
    }
}

/// Projection settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConfig {
    /// World width of the orthographic capture at zoom 1
    pub ortho_width: f32,
    /// Zoom factor; guarded by [`MIN_ZOOM`]
    pub zoom: f32,
    /// Clamp to half the effective world width instead of `clamp_radius_override`
    pub auto_clamp: bool,
    /// Manual clamp radius; <= 0 disables clamping
    pub clamp_radius_override: f32,
    /// Maximum altitude difference; <= 0 disables the filter
    pub z_tolerance: f32,
    /// Screen-space mirroring
    pub flips: AxisFlip,
    /// Rotate icons by entity heading relative to the observer
    pub icons_use_entity_yaw: bool,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self::from(&MinimapWidgetConfig::default())
    }
}

impl From<&MinimapWidgetConfig> for ProjectionConfig {
    fn from(config: &MinimapWidgetConfig) -> Self {
        let mut flips = AxisFlip::empty();
        flips.set(AxisFlip::X, config.flip_x);
        flips.set(AxisFlip::Y, config.flip_y);
        Self {
            ortho_width: config.ortho_width,
            zoom: config.material_zoom,
            auto_clamp: config.auto_clamp_to_visible,
            clamp_radius_override: config.clamp_world_radius_override,
            z_tolerance: config.z_tolerance,
            flips,
            icons_use_entity_yaw: config.icons_use_actor_yaw,
        }
    }
}

impl ProjectionConfig {
    /// World units visible across the widget after zoom
    pub fn effective_world_width(&self) -> f32 {
        self.ortho_width / self.zoom.max(MIN_ZOOM)
    }

    /// Clamp radius in world units; 0 means unclamped
    pub fn clamp_radius(&self) -> f32 {
        if self.auto_clamp {
            self.effective_world_width() * 0.5
        } else {
            self.clamp_radius_override.max(0.0)
        }
    }
}

/// Project `entries` into icon placements, preserving their order
pub fn project(
    observer: &ObserverState,
    entries: &[TrackedEntry],
    config: &ProjectionConfig,
    viewport: &ProjectionViewport,
) -> Vec<IconPlacement> {
    let mut placements = Vec::with_capacity(entries.len());
    project_into(observer, entries, config, viewport, &mut placements);
    placements
}

/// Same as [`project`], reusing `out`'s allocation (cleared first)
pub fn project_into(
    observer: &ObserverState,
    entries: &[TrackedEntry],
    config: &ProjectionConfig,
    viewport: &ProjectionViewport,
    out: &mut Vec<IconPlacement>,
) {
    out.clear();

    let units_per_pixel = config.effective_world_width() / viewport.width_px.max(MIN_WIDGET_WIDTH_PX);
    if !(units_per_pixel.is_finite() && units_per_pixel > 0.0) {
        log::debug!("Minimap world width {} is not drawable, nothing projected", config.effective_world_width());
        return;
    }
    let clamp_radius = config.clamp_radius();
    let clamp_radius_sq = if clamp_radius > 0.0 {
        clamp_radius * clamp_radius
    } else {
        f32::INFINITY
    };
    let map_rotation = Rotation2::new(-utils::deg_to_rad(observer.yaw_degrees));

    for entry in entries {
        let position = entry.world_position;
        if !(position.x.is_finite() && position.y.is_finite() && position.z.is_finite()) {
            log::warn!("Skipping {:?} with non-finite position {:?}", entry.entity, position);
            continue;
        }

        if config.z_tolerance > 0.0 && (position.z - observer.position.z).abs() > config.z_tolerance {
            continue;
        }

        let offset = utils::xy(&(position - observer.position));
        if offset.norm_squared() > clamp_radius_sq {
            continue;
        }

        let rotated = map_rotation * offset;
        let mut screen = Vec2::new(rotated.x, -rotated.y);
        if config.flips.contains(AxisFlip::X) {
            screen.x = -screen.x;
        }
        if config.flips.contains(AxisFlip::Y) {
            screen.y = -screen.y;
        }

        let rotation = if config.icons_use_entity_yaw {
            utils::deg_to_rad(observer.yaw_degrees - entry.yaw_degrees)
        } else {
            0.0
        };

        out.push(IconPlacement {
            screen_position: viewport.center + screen / units_per_pixel,
            rotation,
            style_index: entry.icon_style_index,
        });
    }

    log::trace!("Projected {} of {} minimap entries", out.len(), entries.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use slotmap::KeyData;

    fn center() -> Vec2 {
        Vec2::new(400.0, 300.0)
    }

    fn entry(x: f32, y: f32, z: f32) -> TrackedEntry {
        TrackedEntry {
            entity: Entity::from(KeyData::from_ffi(1)),
            icon_style_index: 3,
            world_position: Vec3::new(x, y, z),
            yaw_degrees: 0.0,
        }
    }

    /// Effective width 1000 world units over `width_px` pixels, no clamp
    fn config() -> ProjectionConfig {
        ProjectionConfig {
            ortho_width: 1000.0,
            zoom: 1.0,
            auto_clamp: false,
            clamp_radius_override: 0.0,
            z_tolerance: 0.0,
            flips: AxisFlip::empty(),
            icons_use_entity_yaw: false,
        }
    }

    fn viewport(width_px: f32) -> ProjectionViewport {
        ProjectionViewport { center: center(), width_px }
    }

    fn offset_of(placements: &[IconPlacement]) -> Vec2 {
        placements[0].screen_position - center()
    }

    #[test]
    fn test_scale_to_pixels() {
        let placements = project(&ObserverState::origin(), &[entry(500.0, 0.0, 0.0)], &config(), &viewport(200.0));

        assert_eq!(placements.len(), 1);
        assert_relative_eq!(offset_of(&placements), Vec2::new(100.0, 0.0), epsilon = 1e-4);
        assert_eq!(placements[0].style_index, 3);
        assert_eq!(placements[0].rotation, 0.0);
    }

    #[test]
    fn test_world_y_up_maps_to_screen_y_down() {
        let placements = project(&ObserverState::origin(), &[entry(0.0, 100.0, 0.0)], &config(), &viewport(1000.0));
        assert_relative_eq!(offset_of(&placements), Vec2::new(0.0, -100.0), epsilon = 1e-4);
    }

    #[test]
    fn test_observer_yaw_rotates_offsets_backwards() {
        let observer = ObserverState::new(Vec3::zeros(), 90.0);
        let placements = project(&observer, &[entry(100.0, 0.0, 0.0)], &config(), &viewport(1000.0));

        // (100, 0) rotated by -90° is (0, -100); screen Y is flipped
        assert_relative_eq!(offset_of(&placements), Vec2::new(0.0, 100.0), epsilon = 1e-3);
    }

    #[test]
    fn test_rotation_preserves_distance() {
        let entries = [entry(120.0, -35.0, 0.0)];
        let base = project(&ObserverState::origin(), &entries, &config(), &viewport(1000.0));
        for yaw in [15.0_f32, 90.0, 181.0, -60.0] {
            let turned = project(&ObserverState::new(Vec3::zeros(), yaw), &entries, &config(), &viewport(1000.0));
            assert_relative_eq!(offset_of(&turned).norm(), offset_of(&base).norm(), epsilon = 1e-3);

            // Screen offsets turn by +yaw because screen Y points down
            let angle = offset_of(&turned).y.atan2(offset_of(&turned).x)
                - offset_of(&base).y.atan2(offset_of(&base).x);
            let wrapped = (angle - utils::deg_to_rad(yaw)).sin();
            assert_relative_eq!(wrapped, 0.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_offset_is_relative_to_observer() {
        let observer = ObserverState::new(Vec3::new(1000.0, 1000.0, 0.0), 0.0);
        let placements = project(&observer, &[entry(1250.0, 1000.0, 0.0)], &config(), &viewport(1000.0));
        assert_relative_eq!(offset_of(&placements), Vec2::new(250.0, 0.0), epsilon = 1e-3);
    }

    #[test]
    fn test_clamp_boundary_is_inclusive() {
        let mut config = config();
        config.clamp_radius_override = 1000.0;
        let entries = [entry(1000.0, 0.0, 0.0), entry(1000.01, 0.0, 0.0)];

        let placements = project(&ObserverState::origin(), &entries, &config, &viewport(1000.0));
        assert_eq!(placements.len(), 1);
        assert_relative_eq!(offset_of(&placements).x, 1000.0, epsilon = 1e-3);
    }

    #[test]
    fn test_auto_clamp_uses_half_effective_width() {
        let mut config = config();
        config.auto_clamp = true;
        config.zoom = 2.0;
        config.clamp_radius_override = 0.0;

        assert_relative_eq!(config.effective_world_width(), 500.0);
        assert_relative_eq!(config.clamp_radius(), 250.0);

        let entries = [entry(0.0, 249.0, 0.0), entry(0.0, 251.0, 0.0)];
        let placements = project(&ObserverState::origin(), &entries, &config, &viewport(500.0));
        assert_eq!(placements.len(), 1);
    }

    #[test]
    fn test_non_positive_radius_is_unclamped() {
        let mut config = config();
        config.clamp_radius_override = -5.0;
        let placements = project(&ObserverState::origin(), &[entry(1.0e6, 0.0, 0.0)], &config, &viewport(1000.0));
        assert_eq!(placements.len(), 1);
    }

    #[test]
    fn test_altitude_filter() {
        let mut config = config();
        config.z_tolerance = 100.0;
        let observer = ObserverState::new(Vec3::new(0.0, 0.0, 50.0), 0.0);
        let entries = [entry(1.0, 0.0, 150.0), entry(2.0, 0.0, 151.0), entry(3.0, 0.0, -50.0)];

        let placements = project(&observer, &entries, &config, &viewport(1000.0));
        assert_eq!(placements.len(), 2);

        config.z_tolerance = 0.0;
        assert_eq!(project(&observer, &entries, &config, &viewport(1000.0)).len(), 3);
    }

    #[test]
    fn test_axis_flips() {
        let mut config = config();
        config.flips = AxisFlip::X | AxisFlip::Y;
        let placements = project(&ObserverState::origin(), &[entry(100.0, 50.0, 0.0)], &config, &viewport(1000.0));
        assert_relative_eq!(offset_of(&placements), Vec2::new(-100.0, 50.0), epsilon = 1e-4);
    }

    #[test]
    fn test_icon_rotation_from_entity_yaw() {
        let mut config = config();
        config.icons_use_entity_yaw = true;
        let mut tracked = entry(10.0, 0.0, 0.0);
        tracked.yaw_degrees = 30.0;

        let observer = ObserverState::new(Vec3::zeros(), 120.0);
        let placements = project(&observer, &[tracked], &config, &viewport(1000.0));
        assert_relative_eq!(placements[0].rotation, utils::deg_to_rad(90.0), epsilon = 1e-5);
    }

    #[test]
    fn test_degenerate_inputs_stay_finite() {
        let mut config = config();
        config.zoom = 0.0;
        let placements = project(&ObserverState::origin(), &[entry(10.0, 20.0, 0.0)], &config, &viewport(0.0));

        assert_eq!(placements.len(), 1);
        assert!(placements[0].screen_position.x.is_finite());
        assert!(placements[0].screen_position.y.is_finite());
        assert!(project(&ObserverState::origin(), &[], &config, &viewport(0.0)).is_empty());
    }

    #[test]
    fn test_zero_ortho_width_projects_nothing() {
        let mut config = config();
        config.ortho_width = 0.0;
        let placements = project(&ObserverState::origin(), &[entry(10.0, 0.0, 0.0)], &config, &viewport(200.0));
        assert!(placements.is_empty());

        config.ortho_width = f32::INFINITY;
        let placements = project(&ObserverState::origin(), &[entry(10.0, 0.0, 0.0)], &config, &viewport(200.0));
        assert!(placements.is_empty());
    }

    #[test]
    fn test_non_finite_positions_are_skipped() {
        let placements = project(
            &ObserverState::origin(),
            &[entry(f32::NAN, 0.0, 0.0), entry(1.0, 0.0, 0.0)],
            &config(),
            &viewport(1000.0),
        );
        assert_eq!(placements.len(), 1);
    }

    #[test]
    fn test_observer_from_missing_pawn() {
        let mut world = World::new();
        assert_eq!(ObserverState::from_pawn(&world, None, 90.0), ObserverState::origin());

        let pawn = world.create_entity();
        world.add_component(pawn, TransformComponent::from_position_yaw(Vec3::new(5.0, 6.0, 7.0), 10.0));
        let observer = ObserverState::from_pawn(&world, Some(pawn), 90.0);
        assert_eq!(observer.position, Vec3::new(5.0, 6.0, 7.0));
        assert_relative_eq!(observer.yaw_degrees, 100.0, epsilon = 1e-3);

        world.destroy_entity(pawn);
        assert_eq!(ObserverState::from_pawn(&world, Some(pawn), 90.0), ObserverState::origin());
    }

    #[test]
    fn test_config_from_widget_settings() {
        let widget = MinimapWidgetConfig {
            flip_y: true,
            ..MinimapWidgetConfig::default()
        };
        let config = ProjectionConfig::from(&widget);
        assert_eq!(config.flips, AxisFlip::Y);
        assert_relative_eq!(config.clamp_radius(), 5000.0);
    }
}
