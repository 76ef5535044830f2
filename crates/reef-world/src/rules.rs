//! Per-species decision rules.
//!
//! Each rule decides the fate of one organism: it reads the current
//! generation through [`GridView`] and writes its outcome into the
//! next generation through [`GridViewMut`]. Rules never touch the
//! current grid.
//!
//! Every rule starts with the claim guard: if the next-generation cell at
//! the rule's own position holds anything other than `Empty` or the rule's
//! own kind, an earlier-visited organism already claimed it and the rule
//! returns without effect.

use crate::grid::{GridView, GridViewMut};
use rand::seq::SliceRandom;
use rand::Rng;
use reef_core::{CellKind, Position, Result, SpeciesConfig};

/// Bounds-filtered neighbor positions matching a predicate.
fn neighbors_where<V, F>(view: &V, pos: Position, mut pred: F) -> Result<Vec<Position>>
where
    V: GridView,
    F: FnMut(&V, Position) -> Result<bool>,
{
    let mut matches = Vec::with_capacity(8);
    for neighbor in pos.neighborhood() {
        if view.in_bounds(neighbor) && pred(view, neighbor)? {
            matches.push(neighbor);
        }
    }
    Ok(matches)
}

/// Algae: sessile. Ages, dies past `max_age`, and once mature spawns one
/// offspring into a neighbor that is empty in both generations.
pub fn algae<C, N, R>(
    pos: Position,
    current: &C,
    next: &mut N,
    config: &SpeciesConfig,
    rng: &mut R,
) -> Result<()>
where
    C: GridView,
    N: GridViewMut,
    R: Rng,
{
    let claimed = next.kind(pos)?;
    if claimed != CellKind::Empty && claimed != CellKind::Algae {
        return Ok(());
    }

    let mut cell = current.cell(pos)?;
    cell.age += 1;
    if cell.age > config.max_age {
        // Dies of old age; the next-generation cell stays empty.
        return Ok(());
    }

    if cell.age >= config.reproduce_age {
        // Offspring need a cell nobody occupies now and nobody has claimed.
        let open = neighbors_where(current, pos, |cur, n| {
            Ok(cur.kind(n)? == CellKind::Empty && next.kind(n)? == CellKind::Empty)
        })?;
        if let Some(&spot) = open.choose(rng) {
            next.set_kind(spot, CellKind::Algae)?;
        }
    }

    next.set_cell(pos, cell)
}

/// Herbivore: grazes on adjacent algae, otherwise random-walks.
pub fn herbivore<C, N, R>(
    pos: Position,
    current: &C,
    next: &mut N,
    config: &SpeciesConfig,
    rng: &mut R,
) -> Result<()>
where
    C: GridView,
    N: GridViewMut,
    R: Rng,
{
    forage(pos, current, next, config, CellKind::Herbivore, CellKind::Algae, rng)
}

/// Predator: hunts adjacent herbivores, otherwise random-walks. Same
/// structure as the herbivore with its own, more tolerant thresholds.
pub fn predator<C, N, R>(
    pos: Position,
    current: &C,
    next: &mut N,
    config: &SpeciesConfig,
    rng: &mut R,
) -> Result<()>
where
    C: GridView,
    N: GridViewMut,
    R: Rng,
{
    forage(pos, current, next, config, CellKind::Predator, CellKind::Herbivore, rng)
}

/// Shared mobile-species rule: age/starve, eat or wander, reproduce, move.
///
/// Write order is fixed and observable: consumed prey cell, offspring cell,
/// destination, then the vacated origin. An offspring spawned onto the
/// origin of a moving parent is therefore overwritten by the origin clear.
fn forage<C, N, R>(
    pos: Position,
    current: &C,
    next: &mut N,
    config: &SpeciesConfig,
    kind: CellKind,
    prey: CellKind,
    rng: &mut R,
) -> Result<()>
where
    C: GridView,
    N: GridViewMut,
    R: Rng,
{
    let claimed = next.kind(pos)?;
    if claimed != CellKind::Empty && claimed != kind {
        return Ok(());
    }

    let mut cell = current.cell(pos)?;
    cell.age += 1;
    cell.hunger += 1;
    if cell.age > config.max_age || cell.hunger > config.max_hunger {
        // Old age or starvation; no writes, the default empty cell stands.
        return Ok(());
    }

    let meals = neighbors_where(current, pos, |cur, n| Ok(cur.kind(n)? == prey))?;
    let dest = if let Some(&meal) = meals.choose(rng) {
        cell.hunger = cell.hunger.saturating_sub(config.hunger_decrease);
        // The prey is consumed regardless of what its own rule wrote.
        next.set_kind(meal, CellKind::Empty)?;
        meal
    } else {
        let open = neighbors_where(current, pos, |_, n| Ok(next.kind(n)? == CellKind::Empty))?;
        open.choose(rng).copied().unwrap_or(pos)
    };

    if cell.age >= config.reproduce_age {
        // Nursery cells are judged around the destination, not the origin.
        let nursery =
            neighbors_where(current, dest, |_, n| Ok(next.kind(n)? == CellKind::Empty))?;
        if let Some(&spot) = nursery.choose(rng) {
            next.set_kind(spot, kind)?;
        }
    }

    next.set_cell(dest, cell)?;
    if dest != pos {
        next.set_kind(pos, CellKind::Empty)?;
    }
    Ok(())
}
