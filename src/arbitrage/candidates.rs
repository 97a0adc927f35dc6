use smallvec::{ SmallVec, smallvec };
use strum::EnumCount;

use crate::models::{ currency::Currency, path::Stops };

/// Every sequence of `hops` currencies (the Cartesian power C^hops) in
/// lexicographic order over the declared currency order; the last position
/// varies fastest. Zero hops yields the empty sequence exactly once.
#[derive(Debug, Clone)]
pub struct Candidates {
    odometer: SmallVec<[usize; 8]>,
    exhausted: bool,
}

impl Candidates {
    pub fn new(hops: usize) -> Self {
        Self {
            odometer: smallvec![0; hops],
            exhausted: false,
        }
    }

    /// Number of candidates for a hop count, saturating on overflow
    pub fn total(hops: usize) -> usize {
        u32::try_from(hops)
            .ok()
            .and_then(|h| Currency::COUNT.checked_pow(h))
            .unwrap_or(usize::MAX)
    }
}

impl Iterator for Candidates {
    type Item = Stops;

    fn next(&mut self) -> Option<Stops> {
        if self.exhausted {
            return None;
        }

        let current: Stops = self.odometer
            .iter()
            .filter_map(|&i| Currency::from_index(i))
            .collect();

        self.exhausted = true;
        for slot in self.odometer.iter_mut().rev() {
            *slot += 1;
            if *slot < Currency::COUNT {
                self.exhausted = false;
                break;
            }
            *slot = 0;
        }

        Some(current)
    }
}
