use rand::seq::SliceRandom;
use rand::Rng;

use crate::math::{Color, Point3, Vec3};

const POINT_COUNT: usize = 256;

/// Classic gradient (Perlin) noise: 256 random unit vectors indexed through
/// three independently shuffled permutation tables, one per axis.
#[derive(Clone)]
pub struct Perlin {
    randvec: Vec<Vec3>,
    perm_x: Vec<usize>,
    perm_y: Vec<usize>,
    perm_z: Vec<usize>,
}

impl Perlin {
    pub fn new(rng: &mut impl Rng) -> Perlin {
        let randvec = (0..POINT_COUNT).map(|_| Vec3::random_range(rng, -1.0, 1.0).unit_vector()).collect();
        Perlin {
            randvec,
            perm_x: generate_permutation(rng),
            perm_y: generate_permutation(rng),
            perm_z: generate_permutation(rng),
        }
    }

    pub fn noise(&self, p: &Point3) -> f32 {
        let u = p.x - p.x.floor();
        let v = p.y - p.y.floor();
        let w = p.z - p.z.floor();

        let i = p.x.floor() as i64;
        let j = p.y.floor() as i64;
        let k = p.z.floor() as i64;

        let mut c = [[[Vec3::ZERO; 2]; 2]; 2];
        for (di, row) in c.iter_mut().enumerate() {
            for (dj, col) in row.iter_mut().enumerate() {
                for (dk, cell) in col.iter_mut().enumerate() {
                    let index = self.perm_x[((i + di as i64) & 255) as usize]
                        ^ self.perm_y[((j + dj as i64) & 255) as usize]
                        ^ self.perm_z[((k + dk as i64) & 255) as usize];
                    *cell = self.randvec[index];
                }
            }
        }

        perlin_interp(&c, u, v, w)
    }

    /// Absolute-value fractal sum of gradient-noise octaves, inputs doubled
    /// and amplitude halved at each of `depth` octaves.
    pub fn turbulence(&self, p: &Point3, depth: u32) -> f32 {
        let mut accum = 0.0;
        let mut temp_p = *p;
        let mut weight = 1.0;

        for _ in 0..depth {
            accum += weight * self.noise(&temp_p);
            weight *= 0.5;
            temp_p *= 2.0;
        }

        accum.abs()
    }
}

fn generate_permutation(rng: &mut impl Rng) -> Vec<usize> {
    let mut values: Vec<usize> = (0..POINT_COUNT).collect();
    values.shuffle(rng);
    values
}

fn perlin_interp(c: &[[[Vec3; 2]; 2]; 2], u: f32, v: f32, w: f32) -> f32 {
    let uu = u * u * (3.0 - 2.0 * u);
    let vv = v * v * (3.0 - 2.0 * v);
    let ww = w * w * (3.0 - 2.0 * w);

    let mut accum = 0.0;
    for i in 0..2 {
        for j in 0..2 {
            for k in 0..2 {
                let weight = Vec3::new(u - i as f32, v - j as f32, w - k as f32);
                accum += (i as f32 * uu + (1 - i) as f32 * (1.0 - uu))
                    * (j as f32 * vv + (1 - j) as f32 * (1.0 - vv))
                    * (k as f32 * ww + (1 - k) as f32 * (1.0 - ww))
                    * c[i][j][k].dot(&weight);
            }
        }
    }
    accum
}

const TURBULENCE_DEPTH: u32 = 7;

/// The marble-like noise variant: `0.5*(1 + sin(scale*p.z + 10*turb(scale*p)))`.
#[derive(Clone)]
pub struct NoiseTexture {
    noise: Perlin,
    scale: f32,
}

impl NoiseTexture {
    pub fn new(rng: &mut impl Rng, scale: f32) -> NoiseTexture {
        NoiseTexture { noise: Perlin::new(rng), scale }
    }

    pub fn value(&self, _u: f32, _v: f32, p: &Point3) -> Color {
        let turb = self.noise.turbulence(&(*p * self.scale), TURBULENCE_DEPTH);
        let s = 0.5 * (1.0 + (self.scale * p.z + 10.0 * turb).sin());
        Color::rgb(s, s, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn noise_is_bounded() {
        let mut rng = StdRng::seed_from_u64(1);
        let perlin = Perlin::new(&mut rng);
        for i in 0..20 {
            let p = Point3::new(i as f32 * 0.37, i as f32 * 1.7, -i as f32 * 0.9);
            let n = perlin.noise(&p);
            assert!(n.abs() <= 1.5, "noise magnitude should stay near unit scale, got {n}");
        }
    }

    #[test]
    fn turbulence_is_nonnegative() {
        let mut rng = StdRng::seed_from_u64(2);
        let perlin = Perlin::new(&mut rng);
        let t = perlin.turbulence(&Point3::new(1.0, 2.0, 3.0), 7);
        assert!(t >= 0.0);
    }
}
