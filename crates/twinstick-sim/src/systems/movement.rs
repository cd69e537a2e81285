//! Projectile kinematics.
//!
//! Updates Transform from Velocity each tick and burns down projectile
//! lifetime. Each step is swept against the walls so fast projectiles cannot
//! tunnel through thin geometry at low tick rates. The ship is not integrated
//! here: it only moves through swept moves requested by the controller.

use hecs::World;

use twinstick_core::components::{Projectile, Transform, Velocity, Wall};

use super::collision::sweep_sphere_aabb;

/// Integrate all projectiles by `dt` seconds, stopping at the first wall.
pub fn run(world: &mut World, dt: f32) {
    let walls: Vec<Wall> = world.query::<&Wall>().iter().map(|(_, w)| *w).collect();

    for (_entity, (transform, velocity, projectile)) in
        world.query_mut::<(&mut Transform, &Velocity, &mut Projectile)>()
    {
        let delta = velocity.0 * dt;
        let contact = walls
            .iter()
            .filter_map(|w| sweep_sphere_aabb(transform.location, delta, projectile.radius, w))
            .map(|hit| hit.time)
            .min_by(f32::total_cmp);

        match contact {
            Some(time) => {
                transform.location += delta * time;
                projectile.wall_contact = true;
            }
            None => transform.location += delta,
        }
        projectile.ttl_secs -= dt;
    }
}
