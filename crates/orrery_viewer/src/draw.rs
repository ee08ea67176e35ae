use bevy::prelude::*;

use crate::planet::OrbitPath;

/// Redraws every orbit reference circle from its immutable point list.
pub fn orbit_paths(mut gizmos: Gizmos, paths: Query<&OrbitPath>) {
    for path in &paths {
        gizmos.linestrip(path.points().iter().copied(), Color::WHITE);
    }
}
