use {
    crate::error::TollError,
    serde::{Deserialize, Serialize},
    std::{fmt, str::FromStr},
};

/// Category of a vehicle passing a toll station.
///
/// The class only decides whether the vehicle is exempt from the toll; it
/// carries no other state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleClass {
    Car,
    Motorbike,
    Tractor,
    Emergency,
    Diplomat,
    Foreign,
    Military,
}

impl VehicleClass {
    /// Every known class, in declaration order.
    pub const ALL: [VehicleClass; 7] = [
        VehicleClass::Car,
        VehicleClass::Motorbike,
        VehicleClass::Tractor,
        VehicleClass::Emergency,
        VehicleClass::Diplomat,
        VehicleClass::Foreign,
        VehicleClass::Military,
    ];

    /// Whether vehicles of this class never pay a congestion toll.
    #[inline]
    pub fn is_toll_exempt(&self) -> bool {
        matches!(
            self,
            VehicleClass::Motorbike
                | VehicleClass::Tractor
                | VehicleClass::Emergency
                | VehicleClass::Diplomat
                | VehicleClass::Foreign
                | VehicleClass::Military
        )
    }

    /// Lowercase tag used for parsing and serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleClass::Car => "car",
            VehicleClass::Motorbike => "motorbike",
            VehicleClass::Tractor => "tractor",
            VehicleClass::Emergency => "emergency",
            VehicleClass::Diplomat => "diplomat",
            VehicleClass::Foreign => "foreign",
            VehicleClass::Military => "military",
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleClass {
    type Err = TollError;

    /// Parse a vehicle tag, ignoring case and surrounding whitespace.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let normalized = tag.trim().to_ascii_lowercase();
        VehicleClass::ALL
            .into_iter()
            .find(|class| class.as_str() == normalized)
            .ok_or_else(|| TollError::InvalidVehicle {
                tag: tag.to_string(),
            })
    }
}
