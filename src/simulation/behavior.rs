//! Per-entity tick rules. Each function operates on the simulator's entity
//! slice by slot index, so a late actor sees the grid as earlier actors in
//! the same tick left it.

use rand::prelude::*;

use crate::simulation::config::SimulationConfig;
use crate::simulation::entity::{Body, Entity, Sex};
use crate::simulation::environment::{Environment, Weather};
use crate::simulation::field::{Field, Location};
use crate::simulation::species::SpeciesClass;

/// Advance the entity in `idx` by one tick. Newborns are appended to
/// `entities` (occupying their cells immediately) and act from the next tick.
pub fn act(
    idx: usize,
    entities: &mut Vec<Entity>,
    field: &mut Field,
    env: &mut Environment,
    config: &SimulationConfig,
    rng: &mut impl Rng,
) {
    match entities[idx].kind.class() {
        SpeciesClass::Plant => act_plant(idx, entities, field, &env.weather, rng),
        _ => act_animal(idx, entities, field, env, config, rng),
    }
}

fn act_animal(
    idx: usize,
    entities: &mut Vec<Entity>,
    field: &mut Field,
    env: &mut Environment,
    config: &SimulationConfig,
    rng: &mut impl Rng,
) {
    let kind = entities[idx].kind;
    let params = kind.params();

    // Aging
    entities[idx].age += 1;
    if entities[idx].age > params.max_age {
        kill(entities, field, idx);
        return;
    }

    // Random contraction
    if rng.gen::<f64>() <= config.random_infection_chance {
        if let Body::Animal(state) = &mut entities[idx].body {
            state.infected = true;
        }
    }

    // Infection spread and the shared countdown
    if entities[idx].animal().is_some_and(|a| a.infected) {
        let here = entities[idx].location;
        for loc in field.adjacent_animals(here, entities) {
            if rng.gen::<f64>() <= config.spread_infection_chance {
                if let Some(slot) = field.occupant_at(loc) {
                    if let Body::Animal(other) = &mut entities[slot].body {
                        other.infected = true;
                    }
                }
            }
        }
        env.disease.tick();
        if env.disease.steps_remaining() == 0 {
            kill(entities, field, idx);
            env.disease.record_death();
            return;
        }
    }

    if !entities[idx].is_awake(env.clock.is_daytime()) {
        return;
    }

    // Hunger
    let starved = {
        let state = match &mut entities[idx].body {
            Body::Animal(state) => state,
            Body::Plant => return,
        };
        state.food_level -= 1;
        state.food_level <= 0
    };
    if starved {
        kill(entities, field, idx);
        return;
    }

    give_birth(idx, entities, field, rng);

    // In fog, a sight hunter skips the move entirely; it neither forages nor
    // risks overcrowding this tick.
    if params.visibility_required && env.weather.foggy {
        return;
    }

    let here = entities[idx].location;
    for loc in field.adjacent_locations(here) {
        if let Some(target) = field.occupant_at(loc) {
            if params.diet.contains(&entities[target].kind) {
                consume(idx, target, entities, field);
                move_to(idx, loc, entities, field);
                return;
            }
        }
    }
    match field.free_adjacent_location(here) {
        Some(loc) => move_to(idx, loc, entities, field),
        // Overcrowding
        None => kill(entities, field, idx),
    }
}

fn act_plant(
    idx: usize,
    entities: &mut Vec<Entity>,
    field: &mut Field,
    weather: &Weather,
    rng: &mut impl Rng,
) {
    let kind = entities[idx].kind;
    let params = kind.params();

    // Rain doubles growth
    entities[idx].age += if weather.raining { 2 } else { 1 };
    if entities[idx].age > params.max_age {
        kill(entities, field, idx);
        return;
    }

    if rng.gen::<f64>() <= params.spreading_probability {
        let here = entities[idx].location;
        for loc in field.free_adjacent_locations(here) {
            let sprout = Entity::newborn(kind, loc, rng);
            let slot = entities.len();
            field.place(slot, loc);
            entities.push(sprout);
        }
    }
}

/// Breeding. Only a female of breeding age gives birth, and only when the
/// partner scan succeeds: adjacent live animals are checked in field order
/// and the same-kind / opposite-sex flags are overwritten on every neighbor,
/// so the last neighbor alone decides eligibility.
fn give_birth(idx: usize, entities: &mut Vec<Entity>, field: &mut Field, rng: &mut impl Rng) {
    let kind = entities[idx].kind;
    let params = kind.params();
    let here = entities[idx].location;

    let my_sex = match entities[idx].animal() {
        Some(state) if state.sex == Sex::Female => state.sex,
        _ => return,
    };
    if entities[idx].age < params.breeding_age {
        return;
    }

    let mut same_kind = false;
    let mut opposite_sex = false;
    for loc in field.adjacent_animals(here, entities) {
        let Some(slot) = field.occupant_at(loc) else {
            continue;
        };
        same_kind = entities[slot].kind == kind;
        opposite_sex = entities[slot].animal().is_some_and(|p| p.sex != my_sex);
    }
    if !(same_kind && opposite_sex) {
        return;
    }

    if rng.gen::<f64>() > params.breeding_probability {
        return;
    }
    let births = rng.gen_range(1..=params.max_litter_size);

    let free = field.free_adjacent_locations(here);
    for loc in free.into_iter().take(births as usize) {
        let child = Entity::newborn(kind, loc, rng);
        let slot = entities.len();
        field.place(slot, loc);
        entities.push(child);
    }
}

/// Eat `target` if it is alive and of an edible class: the eater gains the
/// target's food value (uncapped) and the target's cell is vacated at once.
fn consume(eater: usize, target: usize, entities: &mut [Entity], field: &mut Field) {
    if !entities[target].alive || !entities[target].kind.is_edible() {
        return;
    }
    let value = entities[target].kind.params().food_value;
    entities[target].alive = false;
    field.clear(entities[target].location);
    if let Body::Animal(state) = &mut entities[eater].body {
        state.food_level += value;
    }
}

fn move_to(idx: usize, destination: Location, entities: &mut [Entity], field: &mut Field) {
    field.clear(entities[idx].location);
    field.place(idx, destination);
    entities[idx].location = destination;
}

fn kill(entities: &mut [Entity], field: &mut Field, idx: usize) {
    entities[idx].alive = false;
    field.clear(entities[idx].location);
}
