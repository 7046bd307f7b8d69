use fastnoise_lite::{FastNoiseLite, NoiseType};

use crate::params::FractalParams;

pub(crate) fn simplex(seed: i32) -> FastNoiseLite {
    let mut n = FastNoiseLite::with_seed(seed);
    n.set_noise_type(Some(NoiseType::OpenSimplex2));
    n.set_frequency(Some(1.0));
    n
}

/// Octave sum normalized back into roughly `[-1, 1]`.
pub(crate) struct Fbm {
    noise: FastNoiseLite,
    octaves: u32,
    frequency: f32,
    persistence: f32,
    lacunarity: f32,
}

impl Fbm {
    pub(crate) fn new(seed: i32, octaves: u32, frequency: f32, persistence: f32, lacunarity: f32) -> Self {
        Self {
            noise: simplex(seed),
            octaves: octaves.max(1),
            frequency,
            persistence,
            lacunarity,
        }
    }

    pub(crate) fn from_params(seed: i32, p: &FractalParams, persistence: f32, lacunarity: f32) -> Self {
        Self::new(seed, p.octaves, p.frequency, persistence, lacunarity)
    }

    pub(crate) fn sample2(&self, x: f32, z: f32) -> f32 {
        let mut amp = 1.0_f32;
        let mut freq = self.frequency;
        let mut sum = 0.0_f32;
        let mut max_amp = 0.0_f32;
        for _ in 0..self.octaves {
            sum += self.noise.get_noise_2d(x * freq, z * freq) * amp;
            max_amp += amp;
            amp *= self.persistence;
            freq *= self.lacunarity;
        }
        if max_amp > 0.0 { sum / max_amp } else { sum }
    }

    pub(crate) fn sample3(&self, x: f32, y: f32, z: f32) -> f32 {
        let mut amp = 1.0_f32;
        let mut freq = self.frequency;
        let mut sum = 0.0_f32;
        let mut max_amp = 0.0_f32;
        for _ in 0..self.octaves {
            sum += self.noise.get_noise_3d(x * freq, y * freq, z * freq) * amp;
            max_amp += amp;
            amp *= self.persistence;
            freq *= self.lacunarity;
        }
        if max_amp > 0.0 { sum / max_amp } else { sum }
    }
}
