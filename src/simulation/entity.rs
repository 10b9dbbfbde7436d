use rand::prelude::*;

use crate::simulation::field::Location;
use crate::simulation::species::{Kind, SpeciesClass};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

/// Mutable state carried only by animals.
#[derive(Debug, Clone)]
pub struct AnimalState {
    pub food_level: i32,
    pub sex: Sex,
    pub infected: bool,
}

#[derive(Debug, Clone)]
pub enum Body {
    Animal(AnimalState),
    Plant,
}

/// An individual animal or plant on the field.
#[derive(Debug, Clone)]
pub struct Entity {
    pub kind: Kind,
    pub location: Location,
    pub age: u32,
    pub alive: bool,
    pub body: Body,
}

impl Entity {
    /// A newly born (or newly sprouted) entity: age 0, animals at their
    /// kind's initial food level with a random sex.
    pub fn newborn(kind: Kind, location: Location, rng: &mut impl Rng) -> Self {
        let body = if kind.is_plant() {
            Body::Plant
        } else {
            Body::Animal(AnimalState {
                food_level: kind.params().initial_food_level,
                sex: random_sex(rng),
                infected: false,
            })
        };
        Self {
            kind,
            location,
            age: 0,
            alive: true,
            body,
        }
    }

    /// An entity created when stocking the field: animals get a random age
    /// (predators up to half their max age, prey up to a third) and a random
    /// food level below their initial level; plants start at age 0.
    pub fn populate(kind: Kind, location: Location, rng: &mut impl Rng) -> Self {
        let params = kind.params();
        match params.class {
            SpeciesClass::Plant => Self::newborn(kind, location, rng),
            class => {
                let sex = random_sex(rng);
                let age_cap = match class {
                    SpeciesClass::Predator => params.max_age / 2,
                    _ => params.max_age / 3,
                };
                let age = rng.gen_range(0..age_cap);
                let food_level = rng.gen_range(0..params.initial_food_level);
                Self {
                    kind,
                    location,
                    age,
                    alive: true,
                    body: Body::Animal(AnimalState {
                        food_level,
                        sex,
                        infected: false,
                    }),
                }
            }
        }
    }

    pub fn is_animal(&self) -> bool {
        matches!(self.body, Body::Animal(_))
    }

    pub fn is_plant(&self) -> bool {
        matches!(self.body, Body::Plant)
    }

    pub fn animal(&self) -> Option<&AnimalState> {
        match &self.body {
            Body::Animal(state) => Some(state),
            Body::Plant => None,
        }
    }

    pub fn animal_mut(&mut self) -> Option<&mut AnimalState> {
        match &mut self.body {
            Body::Animal(state) => Some(state),
            Body::Plant => None,
        }
    }

    /// Diurnal kinds are awake during the day, nocturnal kinds at night.
    pub fn is_awake(&self, daytime: bool) -> bool {
        self.kind.params().diurnal == daytime
    }
}

fn random_sex(rng: &mut impl Rng) -> Sex {
    if rng.gen_bool(0.5) {
        Sex::Male
    } else {
        Sex::Female
    }
}
