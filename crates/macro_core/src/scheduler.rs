//! Greedy priority scheduling of a ranked rotation into an action log.

use crate::action_log::ActionLog;
use crate::error::{MacroError, Result};
use crate::{Ability, GLOBAL_COOLDOWN_FLOOR};

/// Knobs for a scheduling run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildOptions {
    /// Minimum seconds between two consecutive actions.
    pub global_cooldown_floor: f64,
    /// Precede every cast with a `# Casting: <name>` comment.
    pub verbose: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            global_cooldown_floor: GLOBAL_COOLDOWN_FLOOR,
            verbose: false,
        }
    }
}

/// Result of one scheduling run.
#[derive(Debug, Clone, PartialEq)]
pub struct MacroRun {
    pub log: ActionLog,
    /// Outer-loop iterations: one per cast plus one per stall.
    pub events: u32,
    /// Iterations where nothing was ready and idle time was folded into the
    /// previous wait.
    pub stalls: u32,
}

/// Build a macro of `target_count` casts from `rotation` (highest priority
/// first) using the default global cooldown floor.
///
/// Timing state on `rotation` is mutated in place; reset it before reusing
/// the same abilities for another run.
pub fn build(rotation: &mut [Ability], target_count: u32, verbose: bool) -> Result<MacroRun> {
    build_with(
        rotation,
        target_count,
        &BuildOptions {
            verbose,
            ..BuildOptions::default()
        },
    )
}

/// Greedy priority simulation.
///
/// Order of operations per event:
/// 1. Pick the first ready ability in priority order.
/// 2. If one exists, cast it: emit cast + wait lines, reset its timer, and
///    advance every other ability by the cast delay.
/// 3. Otherwise stall: lengthen the last wait by the shortest remaining
///    cooldown and advance every ability by that much.
pub fn build_with(
    rotation: &mut [Ability],
    target_count: u32,
    options: &BuildOptions,
) -> Result<MacroRun> {
    check_preconditions(rotation, target_count, options)?;

    let mut run = MacroRun {
        log: ActionLog::new(),
        events: 0,
        stalls: 0,
    };
    let mut casts_done = 0u32;

    while casts_done < target_count {
        run.events += 1;
        match rotation.iter().position(Ability::is_ready) {
            Some(chosen) => {
                cast(rotation, chosen, options, &mut run.log);
                casts_done += 1;
            }
            None => {
                if run.stalls == 0 {
                    tracing::warn!(
                        casts_done,
                        "no spell was ready in time; consider adding more spells to the rotation"
                    );
                }
                collapse_stall(rotation, &mut run.log)?;
                run.stalls += 1;
            }
        }
    }

    tracing::debug!(
        casts = casts_done,
        events = run.events,
        stalls = run.stalls,
        "macro built"
    );
    Ok(run)
}

fn check_preconditions(rotation: &[Ability], target_count: u32, options: &BuildOptions) -> Result<()> {
    if rotation.is_empty() {
        return Err(MacroError::InvalidInput("rotation is empty".to_string()));
    }
    if target_count == 0 {
        return Err(MacroError::InvalidInput(
            "target cast count must be positive".to_string(),
        ));
    }
    let floor = options.global_cooldown_floor;
    if !floor.is_finite() || floor < 0.0 {
        return Err(MacroError::InvalidInput(format!(
            "global cooldown floor must be a non-negative number, got {floor}"
        )));
    }
    rotation.iter().try_for_each(Ability::validate)
}

fn cast(rotation: &mut [Ability], chosen: usize, options: &BuildOptions, log: &mut ActionLog) {
    let delay = rotation[chosen].cast_delay(options.global_cooldown_floor);
    {
        let ability = &rotation[chosen];
        if options.verbose {
            log.push_comment(&ability.name);
        }
        log.push_cast(ability.kind, ability.slot);
        log.push_wait(delay);
    }
    for (index, ability) in rotation.iter_mut().enumerate() {
        if index == chosen {
            ability.mark_cast();
        } else {
            ability.advance(delay);
        }
    }
}

/// Nothing is ready: every ability must have been cast at least once, since
/// a never-cast ability is always ready. Wait out the shortest remaining
/// cooldown by extending the previous wait line.
pub(crate) fn collapse_stall(rotation: &mut [Ability], log: &mut ActionLog) -> Result<()> {
    let mut min_wait = f64::INFINITY;
    for ability in rotation.iter() {
        let remaining = ability.remaining_cooldown().ok_or_else(|| {
            MacroError::Inconsistent(format!(
                "spell '{}' was never cast but the rotation stalled",
                ability.name
            ))
        })?;
        min_wait = min_wait.min(remaining);
    }

    log.extend_last_wait(min_wait)?;
    for ability in rotation.iter_mut() {
        ability.advance(min_wait);
    }
    Ok(())
}
