use crate::core::actions::render_frame::ports::scene_tracer::SceneTracer;
use crate::core::data::colour::Colour;
use crate::core::data::vec3::Vec3;

const SPHERE_CENTRE: Vec3 = Vec3 {
    x: 0.0,
    y: 0.0,
    z: -3.0,
};
const SPHERE_RADIUS: f32 = 1.0;

// unit vector towards the light, leaning up and to the right
const LIGHT_DIRECTION: Vec3 = Vec3 {
    x: 2.0 / 3.0,
    y: 2.0 / 3.0,
    z: 1.0 / 3.0,
};

const ALBEDO: Colour = Colour {
    r: 0.9,
    g: 0.25,
    b: 0.2,
};
const AMBIENT: f32 = 0.1;

const HORIZON: Colour = Colour {
    r: 1.0,
    g: 1.0,
    b: 1.0,
};
const ZENITH: Colour = Colour {
    r: 0.5,
    g: 0.7,
    b: 1.0,
};

/// One analytic unit sphere under a fixed directional light, with a
/// vertical sky gradient behind it. Rays leave the origin through the
/// camera plane at `z = -1`.
#[derive(Debug, Default)]
pub struct SphereScene;

impl SceneTracer for SphereScene {
    fn trace(&self, u: f32, v: f32) -> Colour {
        let direction = Vec3 {
            x: u,
            y: v,
            z: -1.0,
        }
        .normalised();

        match hit_sphere(direction) {
            Some(t) => {
                let normal = (direction * t - SPHERE_CENTRE).normalised();
                let lambert = normal.dot(LIGHT_DIRECTION).max(0.0);
                ALBEDO * (AMBIENT + (1.0 - AMBIENT) * lambert)
            }
            None => sky(direction),
        }
    }
}

/// Nearest positive intersection distance along a unit-length ray from
/// the origin, if any. The direction being unit length keeps the
/// quadratic's leading coefficient at 1.
fn hit_sphere(direction: Vec3) -> Option<f32> {
    let oc = -SPHERE_CENTRE;
    let half_b = oc.dot(direction);
    let c = oc.dot(oc) - SPHERE_RADIUS * SPHERE_RADIUS;
    let discriminant = half_b * half_b - c;

    if discriminant < 0.0 {
        return None;
    }

    let t = -half_b - discriminant.sqrt();
    (t > 0.0).then_some(t)
}

fn sky(direction: Vec3) -> Colour {
    let t = (direction.y + 1.0) * 0.5;
    HORIZON * (1.0 - t) + ZENITH * t
}
