use serde::{Deserialize, Serialize};

/// The species living on the savanna. Each kind indexes one immutable
/// parameter record in the catalog below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Lion,
    Cheetah,
    Gazelle,
    Zebra,
    Giraffe,
    Grass,
    Acacia,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeciesClass {
    Predator,
    Prey,
    Plant,
}

/// Fixed behavioral parameters for one kind. Breeding fields are zero for
/// plants, `spreading_probability` is zero for animals.
#[derive(Debug, Clone)]
pub struct SpeciesParams {
    pub class: SpeciesClass,
    pub breeding_age: u32,
    pub max_age: u32,
    pub breeding_probability: f64,
    pub max_litter_size: u32,
    pub food_value: i32,
    pub initial_food_level: i32,
    // Defined for every animal but never enforced on consumption.
    pub max_food_level: i32,
    pub diurnal: bool,
    pub visibility_required: bool,
    pub spreading_probability: f64,
    pub diet: &'static [Kind],
}

static LION: SpeciesParams = SpeciesParams {
    class: SpeciesClass::Predator,
    breeding_age: 10,
    max_age: 150,
    breeding_probability: 0.4,
    max_litter_size: 2,
    food_value: 0,
    initial_food_level: 30,
    max_food_level: 45,
    diurnal: false,
    visibility_required: true,
    spreading_probability: 0.0,
    diet: &[Kind::Gazelle, Kind::Giraffe],
};

static CHEETAH: SpeciesParams = SpeciesParams {
    class: SpeciesClass::Predator,
    breeding_age: 10,
    max_age: 150,
    breeding_probability: 0.4,
    max_litter_size: 2,
    food_value: 0,
    initial_food_level: 30,
    max_food_level: 45,
    diurnal: true,
    visibility_required: true,
    spreading_probability: 0.0,
    diet: &[Kind::Gazelle, Kind::Zebra],
};

static GAZELLE: SpeciesParams = SpeciesParams {
    class: SpeciesClass::Prey,
    breeding_age: 8,
    max_age: 100,
    breeding_probability: 0.9,
    max_litter_size: 3,
    food_value: 3,
    initial_food_level: 9,
    max_food_level: 20,
    diurnal: true,
    visibility_required: false,
    spreading_probability: 0.0,
    diet: &[Kind::Grass],
};

static ZEBRA: SpeciesParams = SpeciesParams {
    class: SpeciesClass::Prey,
    breeding_age: 9,
    max_age: 120,
    breeding_probability: 0.9,
    max_litter_size: 2,
    food_value: 4,
    initial_food_level: 10,
    max_food_level: 25,
    diurnal: true,
    visibility_required: false,
    spreading_probability: 0.0,
    diet: &[Kind::Grass, Kind::Acacia],
};

static GIRAFFE: SpeciesParams = SpeciesParams {
    class: SpeciesClass::Prey,
    breeding_age: 8,
    max_age: 120,
    breeding_probability: 0.8,
    max_litter_size: 3,
    food_value: 5,
    initial_food_level: 12,
    max_food_level: 45,
    diurnal: false,
    visibility_required: false,
    spreading_probability: 0.0,
    diet: &[Kind::Acacia],
};

static GRASS: SpeciesParams = SpeciesParams {
    class: SpeciesClass::Plant,
    breeding_age: 0,
    max_age: 18,
    breeding_probability: 0.0,
    max_litter_size: 0,
    food_value: 10,
    initial_food_level: 0,
    max_food_level: 0,
    diurnal: false,
    visibility_required: false,
    spreading_probability: 0.06,
    diet: &[],
};

static ACACIA: SpeciesParams = SpeciesParams {
    class: SpeciesClass::Plant,
    breeding_age: 0,
    max_age: 14,
    breeding_probability: 0.0,
    max_litter_size: 0,
    food_value: 15,
    initial_food_level: 0,
    max_food_level: 0,
    diurnal: false,
    visibility_required: false,
    spreading_probability: 0.063,
    diet: &[],
};

/// Cell-stocking order and per-kind creation probabilities used by populate.
/// Each cell tests the kinds in this order, one draw per test, and takes the
/// first success: large prey first, then plants, then predators. The ordering
/// biases cell assignment and must stay stable for reproducibility.
pub const CREATION_ORDER: [(Kind, f64); 7] = [
    (Kind::Giraffe, 0.02),
    (Kind::Zebra, 0.02),
    (Kind::Gazelle, 0.03),
    (Kind::Grass, 0.04),
    (Kind::Acacia, 0.04),
    (Kind::Lion, 0.015),
    (Kind::Cheetah, 0.015),
];

impl Kind {
    pub const ALL: [Kind; 7] = [
        Kind::Lion,
        Kind::Cheetah,
        Kind::Gazelle,
        Kind::Zebra,
        Kind::Giraffe,
        Kind::Grass,
        Kind::Acacia,
    ];

    pub fn params(&self) -> &'static SpeciesParams {
        match self {
            Kind::Lion => &LION,
            Kind::Cheetah => &CHEETAH,
            Kind::Gazelle => &GAZELLE,
            Kind::Zebra => &ZEBRA,
            Kind::Giraffe => &GIRAFFE,
            Kind::Grass => &GRASS,
            Kind::Acacia => &ACACIA,
        }
    }

    pub fn class(&self) -> SpeciesClass {
        self.params().class
    }

    pub fn is_plant(&self) -> bool {
        self.class() == SpeciesClass::Plant
    }

    pub fn is_animal(&self) -> bool {
        !self.is_plant()
    }

    /// Kinds this kind may consume.
    pub fn diet(&self) -> &'static [Kind] {
        self.params().diet
    }

    /// Predators are never on anyone's menu; prey and plants are.
    pub fn is_edible(&self) -> bool {
        self.class() != SpeciesClass::Predator
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Lion => "lion",
            Kind::Cheetah => "cheetah",
            Kind::Gazelle => "gazelle",
            Kind::Zebra => "zebra",
            Kind::Giraffe => "giraffe",
            Kind::Grass => "grass",
            Kind::Acacia => "acacia",
        }
    }
}
