//! Payload generation
//!
//! All randomness flows through an explicit [`DataGen`] handle so a seeded
//! run always produces the same payloads.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::fixtures::{PodChild, PodStruct, CHILD_SEQUENCE_LEN};

const FLOAT_RANGE: std::ops::Range<f64> = -10000.0..10000.0;
const STRING_LEN: std::ops::RangeInclusive<usize> = 3..=30;

/// Types [`DataGen`] can produce a random value for.
pub trait RandomValue: Sized {
    fn random(rng: &mut StdRng) -> Self;
}

macro_rules! full_range_ints {
    ($($t:ty),*) => {
        $(
            impl RandomValue for $t {
                #[inline]
                fn random(rng: &mut StdRng) -> Self {
                    rng.gen::<$t>()
                }
            }
        )*
    };
}

full_range_ints!(u8, u16, u32, u64, i8, i16, i32, i64);

impl RandomValue for f64 {
    #[inline]
    fn random(rng: &mut StdRng) -> Self {
        rng.gen_range(FLOAT_RANGE)
    }
}

impl RandomValue for f32 {
    #[inline]
    fn random(rng: &mut StdRng) -> Self {
        rng.gen_range(FLOAT_RANGE.start as f32..FLOAT_RANGE.end as f32)
    }
}

impl RandomValue for String {
    fn random(rng: &mut StdRng) -> Self {
        let len = rng.gen_range(STRING_LEN);
        (0..len).map(|_| rng.gen_range(b' '..=b'~') as char).collect()
    }
}

pub struct DataGen {
    rng: StdRng,
}

impl DataGen {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn value<T: RandomValue>(&mut self) -> T {
        T::random(&mut self.rng)
    }

    /// `len` elements, random when `randomize` is set and default-valued
    /// otherwise. Zeroed payloads isolate codec overhead from
    /// value-dependent costs such as varint width.
    pub fn vector<T: RandomValue + Default + Clone>(&mut self, len: usize, randomize: bool) -> Vec<T> {
        if randomize {
            (0..len).map(|_| self.value()).collect()
        } else {
            vec![T::default(); len]
        }
    }

    /// Printable ASCII string of 3 to 30 characters
    pub fn basic_string(&mut self) -> String {
        self.value()
    }

    /// `n` characters, each `'0'` or `'1'`
    pub fn binary_string(&mut self, n: usize) -> String {
        (0..n)
            .map(|_| if self.rng.gen::<bool>() { '1' } else { '0' })
            .collect()
    }

    pub fn pod_struct(&mut self) -> PodStruct {
        PodStruct {
            a: self.value(),
            b: self.value(),
            c: self.value(),
            d: self.value(),
        }
    }

    pub fn pod_child(&mut self) -> PodChild {
        PodChild {
            base: self.pod_struct(),
            v: self.vector(CHILD_SEQUENCE_LEN, true),
        }
    }

    pub fn pod_structs(&mut self, len: usize, randomize: bool) -> Vec<PodStruct> {
        if randomize {
            (0..len).map(|_| self.pod_struct()).collect()
        } else {
            vec![PodStruct::default(); len]
        }
    }

    pub fn pod_children(&mut self, len: usize, randomize: bool) -> Vec<PodChild> {
        if randomize {
            (0..len).map(|_| self.pod_child()).collect()
        } else {
            vec![PodChild::default(); len]
        }
    }
}
