//! Randomized building generation.
//!
//! The random source is owned by the [`BuildingGenerator`] and handed in by the
//! caller. Use [`BuildingGenerator::seeded`] for reproducible output.

use std::ops::Range;

use estate_common::building::{ApartmentType, Building, BuildingKind, CommercialType};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

pub const RESIDENTIAL_NAME: &str = "Residential Building";
pub const COMMERCIAL_NAME: &str = "Commercial Building";

pub const STREET_NUMBERS: Range<u32> = 1..1000;

pub const RESIDENTIAL_AREA: Range<u32> = 500..2000;
pub const RESIDENTIAL_FLOORS: Range<u32> = 3..20;
pub const RESIDENTIAL_YEARS: Range<i32> = 1950..2020;
pub const RESIDENTIAL_APARTMENTS: Range<u32> = 10..100;

pub const COMMERCIAL_AREA: Range<u32> = 1000..5000;
pub const COMMERCIAL_FLOORS: Range<u32> = 1..10;
pub const COMMERCIAL_YEARS: Range<i32> = 1970..2020;

pub struct BuildingGenerator<R: Rng> {
    rng: R,
}

impl BuildingGenerator<StdRng> {
    /// Deterministic generator; the same seed yields the same buildings.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> BuildingGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self, kind: BuildingKind) -> Building {
        match kind {
            BuildingKind::Residential => self.residential(),
            BuildingKind::Commercial => self.commercial(),
        }
    }

    pub fn residential(&mut self) -> Building {
        let address = self.address();
        let area = f64::from(self.rng.random_range(RESIDENTIAL_AREA));
        let floors = self.rng.random_range(RESIDENTIAL_FLOORS);
        let year_built = self.rng.random_range(RESIDENTIAL_YEARS);
        let apartments = self.rng.random_range(RESIDENTIAL_APARTMENTS);
        let apartment_type = ApartmentType::ALL[self.rng.random_range(0..ApartmentType::ALL.len())];

        let building = Building::residential(
            RESIDENTIAL_NAME,
            address,
            area,
            floors,
            year_built,
            apartments,
            apartment_type,
        );
        trace!("generated {building}");
        building
    }

    pub fn commercial(&mut self) -> Building {
        let address = self.address();
        let area = f64::from(self.rng.random_range(COMMERCIAL_AREA));
        let floors = self.rng.random_range(COMMERCIAL_FLOORS);
        let year_built = self.rng.random_range(COMMERCIAL_YEARS);
        let building_type = CommercialType::ALL[self.rng.random_range(0..CommercialType::ALL.len())];

        let building = Building::commercial(
            COMMERCIAL_NAME,
            address,
            area,
            floors,
            year_built,
            building_type,
        );
        trace!("generated {building}");
        building
    }

    fn address(&mut self) -> String {
        format!("{} Street, City", self.rng.random_range(STREET_NUMBERS))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
