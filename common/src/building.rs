//! Buildings and their variant-specific data.
//!
//! A [`Building`] carries the attributes every structure shares and a
//! [`BuildingDetails`] value for the variant. The set of variants is closed,
//! so rendering the variant info is a plain `match` instead of dynamic dispatch.

use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApartmentType {
    Studio,
    OneBedroom,
    TwoBedrooms,
    ThreeBedrooms,
}

impl ApartmentType {
    pub const ALL: [ApartmentType; 4] = [
        ApartmentType::Studio,
        ApartmentType::OneBedroom,
        ApartmentType::TwoBedrooms,
        ApartmentType::ThreeBedrooms,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApartmentType::Studio => "Studio",
            ApartmentType::OneBedroom => "1 Bedroom",
            ApartmentType::TwoBedrooms => "2 Bedrooms",
            ApartmentType::ThreeBedrooms => "3 Bedrooms",
        }
    }
}

impl Display for ApartmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommercialType {
    Office,
    Retail,
    Restaurant,
    Hotel,
}

impl CommercialType {
    pub const ALL: [CommercialType; 4] = [
        CommercialType::Office,
        CommercialType::Retail,
        CommercialType::Restaurant,
        CommercialType::Hotel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommercialType::Office => "Office",
            CommercialType::Retail => "Retail",
            CommercialType::Restaurant => "Restaurant",
            CommercialType::Hotel => "Hotel",
        }
    }
}

impl Display for CommercialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which variant a building is, without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildingKind {
    Residential,
    Commercial,
}

impl BuildingKind {
    /// Type name shown after a building is generated.
    pub fn type_name(&self) -> &'static str {
        match self {
            BuildingKind::Residential => "ResidentialBuilding",
            BuildingKind::Commercial => "CommercialBuilding",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BuildingDetails {
    Residential {
        apartments: u32,
        apartment_type: ApartmentType,
    },
    Commercial {
        building_type: CommercialType,
    },
}

/// An immutable description of a single structure.
///
/// No cross-field checks are made: a negative area, zero floors or a
/// year in the future are all stored as given.
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    name: String,
    address: String,
    area: f64,
    floors: u32,
    year_built: i32,
    details: BuildingDetails,
}

impl Building {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        area: f64,
        floors: u32,
        year_built: i32,
        details: BuildingDetails,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            area,
            floors,
            year_built,
            details,
        }
    }

    pub fn residential(
        name: impl Into<String>,
        address: impl Into<String>,
        area: f64,
        floors: u32,
        year_built: i32,
        apartments: u32,
        apartment_type: ApartmentType,
    ) -> Self {
        let details = BuildingDetails::Residential {
            apartments,
            apartment_type,
        };
        Self::new(name, address, area, floors, year_built, details)
    }

    pub fn commercial(
        name: impl Into<String>,
        address: impl Into<String>,
        area: f64,
        floors: u32,
        year_built: i32,
        building_type: CommercialType,
    ) -> Self {
        let details = BuildingDetails::Commercial { building_type };
        Self::new(name, address, area, floors, year_built, details)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn floors(&self) -> u32 {
        self.floors
    }

    pub fn year_built(&self) -> i32 {
        self.year_built
    }

    pub fn details(&self) -> &BuildingDetails {
        &self.details
    }

    pub fn kind(&self) -> BuildingKind {
        match self.details {
            BuildingDetails::Residential { .. } => BuildingKind::Residential,
            BuildingDetails::Commercial { .. } => BuildingKind::Commercial,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        self.kind().type_name()
    }

    /// Renders the variant-specific fields.
    pub fn additional_info(&self) -> String {
        match &self.details {
            BuildingDetails::Residential {
                apartments,
                apartment_type,
            } => format!("Apartments: {apartments}, Apartment Type: {apartment_type}"),
            BuildingDetails::Commercial { building_type } => {
                format!("Building Type: {building_type}")
            }
        }
    }
}

impl Display for Building {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Address: {}, Area: {}, Floors: {}, Year Built: {}, {}",
            self.name,
            self.address,
            self.area,
            self.floors,
            self.year_built,
            self.additional_info()
        )
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
