use std::sync::Arc;

use rand::{Rng, SeedableRng};

use crate::{
    camera::{Camera, CameraSettings},
    error::{MeshLoadError, SceneBuildError},
    estimator::Background,
    materials::{dielectric::Dielectric, diffuse_light::DiffuseLight, lambertian::Lambertian, metal::Metal, Materials},
    math::{Color, Point3, Vec3},
    objects::{
        aabox::AaBox,
        bvh::BvhNode,
        hittable_list::HittableList,
        moving_sphere::MovingSphere,
        rect::{AaRect, RectPlane},
        sphere::Sphere,
        triangle::Triangle,
        Hittables,
    },
    textures::{checker_texture::CheckerTexture, image_texture::ImageTexture, perlin::NoiseTexture, solid_color::SolidColor, Textures},
};

use super::Scene;

fn bvh_root(objects: Vec<Hittables>, rng: &mut impl Rng) -> Hittables {
    if objects.len() == 1 {
        return objects.into_iter().next().unwrap();
    }
    Hittables::Bvh(Arc::new(BvhNode::build(objects, 0.0, 1.0, rng)))
}

fn solid(color: Vec3) -> Arc<Textures> {
    Arc::new(Textures::SolidColor(SolidColor::new(color)))
}

/// Builds one of the seven hard-coded test scenes. `scene_index` is
/// validated by `Config::validate` before this is called.
pub fn build(scene_index: u32, aspect_ratio: f32, rng: &mut impl Rng) -> Result<Scene, SceneBuildError> {
    match scene_index {
        0 => Ok(random_spheres(aspect_ratio, rng)),
        1 => Ok(motion_blur_spheres(aspect_ratio, rng)),
        2 => Ok(checkered_spheres(aspect_ratio, rng)),
        3 => Ok(perlin_spheres(aspect_ratio, rng)),
        4 => Ok(cornell_box(aspect_ratio, rng)),
        5 => earth(aspect_ratio).map_err(|e| SceneBuildError::InvalidConfig(e.to_string())),
        6 => teapot(aspect_ratio).map_err(|e| SceneBuildError::InvalidConfig(e.to_string())),
        other => Err(SceneBuildError::UnknownScene(other)),
    }
}

/// Scene 0: the classic "random spheres" grid over a large ground sphere.
fn random_spheres(aspect_ratio: f32, rng: &mut impl Rng) -> Scene {
    let mut world = Vec::new();

    let ground_texture = Arc::new(Textures::CheckerTexture(CheckerTexture::new(
        10.0,
        solid(Vec3::new(0.2, 0.3, 0.1)),
        solid(Vec3::new(0.9, 0.9, 0.9)),
    )));
    let ground_material = Arc::new(Materials::Lambertian(Lambertian::new(ground_texture)));
    world.push(Hittables::Sphere(Sphere::new(Point3::new(0.0, -1000.0, 0.0), 1000.0, ground_material)));

    for a in -11..11 {
        for b in -11..11 {
            let center = Point3::new(a as f32 + 0.9 * rng.random::<f32>(), 0.2, b as f32 + 0.9 * rng.random::<f32>());
            if (center - Point3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let choose_mat: f32 = rng.random();
            let material = if choose_mat < 0.8 {
                let albedo = Vec3::random(rng) * Vec3::random(rng);
                Arc::new(Materials::Lambertian(Lambertian::new(solid(albedo))))
            } else if choose_mat < 0.95 {
                let albedo = Vec3::random_range(rng, 0.5, 1.0);
                let fuzz = rng.random_range(0.0..0.5);
                Arc::new(Materials::Metal(Metal::new(Color::rgb(albedo.x, albedo.y, albedo.z), fuzz)))
            } else {
                Arc::new(Materials::Dielectric(Dielectric::new(1.5)))
            };

            world.push(Hittables::Sphere(Sphere::new(center, 0.2, material)));
        }
    }

    world.push(Hittables::Sphere(Sphere::new(
        Point3::new(0.0, 1.0, 0.0),
        1.0,
        Arc::new(Materials::Dielectric(Dielectric::new(1.5))),
    )));
    world.push(Hittables::Sphere(Sphere::new(
        Point3::new(-4.0, 1.0, 0.0),
        1.0,
        Arc::new(Materials::Lambertian(Lambertian::new(solid(Vec3::new(0.4, 0.2, 0.1))))),
    )));
    world.push(Hittables::Sphere(Sphere::new(
        Point3::new(4.0, 1.0, 0.0),
        1.0,
        Arc::new(Materials::Metal(Metal::new(Color::rgb(0.7, 0.6, 0.5), 0.0))),
    )));

    let camera = Camera::new(CameraSettings {
        look_from: Point3::new(13.0, 2.0, 3.0),
        look_at: Point3::ZERO,
        up: Vec3::new(0.0, 1.0, 0.0),
        vertical_fov_degrees: 20.0,
        aspect_ratio,
        aperture: 0.1,
        focus_distance: 10.0,
        shutter_open: 0.0,
        shutter_close: 0.0,
    });

    Scene { world: bvh_root(world, rng), camera, background: Background::GradientSky }
}

/// Scene 1: scene 0's grid, but the small spheres move over the shutter
/// interval, exercising `MovingSphere`.
fn motion_blur_spheres(aspect_ratio: f32, rng: &mut impl Rng) -> Scene {
    let mut world = Vec::new();

    let ground_material = Arc::new(Materials::Lambertian(Lambertian::new(solid(Vec3::new(0.5, 0.5, 0.5)))));
    world.push(Hittables::Sphere(Sphere::new(Point3::new(0.0, -1000.0, 0.0), 1000.0, ground_material)));

    for a in -6..6 {
        for b in -6..6 {
            let center = Point3::new(a as f32 + 0.9 * rng.random::<f32>(), 0.2, b as f32 + 0.9 * rng.random::<f32>());
            if (center - Point3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let albedo = Vec3::random(rng) * Vec3::random(rng);
            let material = Arc::new(Materials::Lambertian(Lambertian::new(solid(albedo))));
            let center1 = center + Vec3::new(0.0, rng.random_range(0.0..0.5), 0.0);
            world.push(Hittables::MovingSphere(MovingSphere::new(center, center1, 0.0, 1.0, 0.2, material)));
        }
    }

    world.push(Hittables::Sphere(Sphere::new(
        Point3::new(0.0, 1.0, 0.0),
        1.0,
        Arc::new(Materials::Dielectric(Dielectric::new(1.5))),
    )));

    let camera = Camera::new(CameraSettings {
        look_from: Point3::new(13.0, 2.0, 3.0),
        look_at: Point3::ZERO,
        up: Vec3::new(0.0, 1.0, 0.0),
        vertical_fov_degrees: 20.0,
        aspect_ratio,
        aperture: 0.0,
        focus_distance: 10.0,
        shutter_open: 0.0,
        shutter_close: 1.0,
    });

    Scene { world: bvh_root(world, rng), camera, background: Background::GradientSky }
}

/// Scene 2: two large spheres sharing a uv-checker texture.
fn checkered_spheres(aspect_ratio: f32, rng: &mut impl Rng) -> Scene {
    let checker = Arc::new(Textures::CheckerTexture(CheckerTexture::new(
        4.0,
        solid(Vec3::new(0.2, 0.3, 0.1)),
        solid(Vec3::new(0.9, 0.9, 0.9)),
    )));
    let material = Arc::new(Materials::Lambertian(Lambertian::new(checker)));

    let world = vec![
        Hittables::Sphere(Sphere::new(Point3::new(0.0, -10.0, 0.0), 10.0, material.clone())),
        Hittables::Sphere(Sphere::new(Point3::new(0.0, 10.0, 0.0), 10.0, material)),
    ];

    let camera = Camera::new(CameraSettings {
        look_from: Point3::new(13.0, 2.0, 3.0),
        look_at: Point3::ZERO,
        up: Vec3::new(0.0, 1.0, 0.0),
        vertical_fov_degrees: 20.0,
        aspect_ratio,
        aperture: 0.0,
        focus_distance: 10.0,
        shutter_open: 0.0,
        shutter_close: 0.0,
    });

    Scene { world: bvh_root(world, rng), camera, background: Background::GradientSky }
}

/// Scene 3: two spheres sharing a Perlin marble texture.
fn perlin_spheres(aspect_ratio: f32, rng: &mut impl Rng) -> Scene {
    let noise = Arc::new(Textures::NoiseTexture(NoiseTexture::new(rng, 4.0)));
    let material = Arc::new(Materials::Lambertian(Lambertian::new(noise)));

    let world = vec![
        Hittables::Sphere(Sphere::new(Point3::new(0.0, -1000.0, 0.0), 1000.0, material.clone())),
        Hittables::Sphere(Sphere::new(Point3::new(0.0, 2.0, 0.0), 2.0, material)),
    ];

    let camera = Camera::new(CameraSettings {
        look_from: Point3::new(13.0, 2.0, 3.0),
        look_at: Point3::ZERO,
        up: Vec3::new(0.0, 1.0, 0.0),
        vertical_fov_degrees: 20.0,
        aspect_ratio,
        aperture: 0.0,
        focus_distance: 10.0,
        shutter_open: 0.0,
        shutter_close: 0.0,
    });

    Scene { world: bvh_root(world, rng), camera, background: Background::GradientSky }
}

/// Scene 4: a Cornell box preset. Colored walls, a ceiling light, black
/// background (the box is fully enclosed so the background never shows).
fn cornell_box(aspect_ratio: f32, rng: &mut impl Rng) -> Scene {
    let red = Arc::new(Materials::Lambertian(Lambertian::new(solid(Vec3::new(0.65, 0.05, 0.05)))));
    let white = Arc::new(Materials::Lambertian(Lambertian::new(solid(Vec3::new(0.73, 0.73, 0.73)))));
    let green = Arc::new(Materials::Lambertian(Lambertian::new(solid(Vec3::new(0.12, 0.45, 0.15)))));
    let light = Arc::new(Materials::DiffuseLight(DiffuseLight::new(solid(Vec3::new(15.0, 15.0, 15.0)))));

    let mut world = Vec::new();
    // Left wall (green), right wall (red), at x=555/x=0.
    world.push(Hittables::AaRect(AaRect::new(RectPlane::Yz, 0.0, 555.0, 0.0, 555.0, 555.0, green)));
    world.push(Hittables::AaRect(AaRect::new(RectPlane::Yz, 0.0, 555.0, 0.0, 555.0, 0.0, red)));
    // Ceiling light.
    world.push(Hittables::AaRect(AaRect::new(RectPlane::Xz, 213.0, 343.0, 227.0, 332.0, 554.0, light)));
    // Floor and ceiling.
    world.push(Hittables::AaRect(AaRect::new(RectPlane::Xz, 0.0, 555.0, 0.0, 555.0, 0.0, white.clone())));
    world.push(Hittables::AaRect(AaRect::new(RectPlane::Xz, 0.0, 555.0, 0.0, 555.0, 555.0, white.clone())));
    // Back wall.
    world.push(Hittables::AaRect(AaRect::new(RectPlane::Xy, 0.0, 555.0, 0.0, 555.0, 555.0, white.clone())));

    world.push(Hittables::AaBox(AaBox::new(
        Point3::new(130.0, 0.0, 65.0),
        Point3::new(295.0, 165.0, 230.0),
        white.clone(),
    )));
    world.push(Hittables::AaBox(AaBox::new(
        Point3::new(265.0, 0.0, 295.0),
        Point3::new(430.0, 330.0, 460.0),
        white,
    )));

    let camera = Camera::new(CameraSettings {
        look_from: Point3::new(278.0, 278.0, -800.0),
        look_at: Point3::new(278.0, 278.0, 0.0),
        up: Vec3::new(0.0, 1.0, 0.0),
        vertical_fov_degrees: 40.0,
        aspect_ratio,
        aperture: 0.0,
        focus_distance: 10.0,
        shutter_open: 0.0,
        shutter_close: 0.0,
    });

    Scene { world: bvh_root(world, rng), camera, background: Background::Black }
}

/// Scene 5: a single sphere textured with a decoded equirectangular image.
fn earth(aspect_ratio: f32) -> Result<Scene, crate::error::ImageIoError> {
    let path = crate::asset_loader::build_asset_path("earthmap.jpg")
        .unwrap_or_else(|| std::path::PathBuf::from("assets/earthmap.jpg"));
    let texture = Arc::new(Textures::ImageTexture(ImageTexture::load(path.to_string_lossy().as_ref(), true)?));
    let material = Arc::new(Materials::Lambertian(Lambertian::new(texture)));
    let globe = Hittables::Sphere(Sphere::new(Point3::ZERO, 2.0, material));

    let camera = Camera::new(CameraSettings {
        look_from: Point3::new(0.0, 0.0, 12.0),
        look_at: Point3::ZERO,
        up: Vec3::new(0.0, 1.0, 0.0),
        vertical_fov_degrees: 20.0,
        aspect_ratio,
        aperture: 0.0,
        focus_distance: 10.0,
        shutter_open: 0.0,
        shutter_close: 0.0,
    });

    Ok(Scene { world: globe, camera, background: Background::GradientSky })
}

/// Scene 6: an OBJ mesh loaded into a BVH of triangles, sharing one material.
fn teapot(aspect_ratio: f32) -> Result<Scene, MeshLoadError> {
    let path = crate::asset_loader::build_asset_path("teapot.obj")
        .unwrap_or_else(|| std::path::PathBuf::from("assets/teapot.obj"));
    let mesh = crate::asset_loader::obj_loader::load(path)?;

    let material = Arc::new(Materials::Lambertian(Lambertian::new(solid(Vec3::new(0.6, 0.6, 0.7)))));
    let mut triangles = Vec::with_capacity(mesh.indices.len());
    for [i0, i1, i2] in mesh.indices {
        triangles.push(Hittables::Triangle(Triangle::new(
            mesh.vertices[i0].position,
            mesh.vertices[i1].position,
            mesh.vertices[i2].position,
            material.clone(),
        )));
    }

    let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    let world = if triangles.is_empty() {
        Hittables::List(HittableList::new())
    } else {
        bvh_root(triangles, &mut rng)
    };

    let camera = Camera::new(CameraSettings {
        look_from: Point3::new(0.0, 3.0, 8.0),
        look_at: Point3::new(0.0, 1.0, 0.0),
        up: Vec3::new(0.0, 1.0, 0.0),
        vertical_fov_degrees: 35.0,
        aspect_ratio,
        aperture: 0.0,
        focus_distance: 10.0,
        shutter_open: 0.0,
        shutter_close: 0.0,
    });

    Ok(Scene { world, camera, background: Background::GradientSky })
}
