use crate::config::mapping::MappingConfig;
use crate::core::{
    ClockSource, DiagnosticSink, LocalTime, MatchedBy, Order, ResolutionResult, ResponsibleId,
};

const MONDAY: u8 = 1;
const FRIDAY: u8 = 5;

// Handover cutoffs in the business timezone. Once crossed on the boundary
// days of the work week, ownership shifts to the person mapped for that
// weekday; compared lexicographically as (hour, minute).
const MONDAY_HANDOVER: (u8, u8) = (9, 1);
const FRIDAY_HANDOVER: (u8, u8) = (19, 1);

/// Resolves the responsible manager for an order against a mapping
/// configuration.
///
/// Priority: weekday schedule -> tag -> country code -> source -> default.
/// First match wins; a rule whose guard fails is never revisited. Missing
/// order fields are valid and simply fail their rule's guard. The only
/// signals besides the return value are warning diagnostics when the default
/// is hit or nothing resolves.
pub struct ResponsibleResolver<C: ClockSource, D: DiagnosticSink> {
    clock: C,
    diagnostics: D,
}

impl<C: ClockSource, D: DiagnosticSink> ResponsibleResolver<C, D> {
    pub fn new(clock: C, diagnostics: D) -> Self {
        Self { clock, diagnostics }
    }

    /// Walks the priority chain once. Reads the clock exactly once so the
    /// (weekday, hour, minute) triple cannot straddle a rollover.
    pub fn resolve(&self, config: &MappingConfig, order: &Order) -> ResolutionResult {
        let now = self.clock.now();

        if let Some(id) = Self::match_schedule(config, now) {
            return ResolutionResult::resolved(id.clone(), MatchedBy::Schedule);
        }

        if let Some(id) = Self::match_tag(config, order) {
            return ResolutionResult::resolved(id.clone(), MatchedBy::Tag);
        }

        if let Some(id) = Self::match_country(config, order) {
            return ResolutionResult::resolved(id.clone(), MatchedBy::Country);
        }

        if let Some(id) = Self::match_source(config, order) {
            return ResolutionResult::resolved(id.clone(), MatchedBy::Source);
        }

        if let Some(id) = &config.default_id {
            self.diagnostics
                .warn(&format!("responsible matched by default for order {}", order.id));
            return ResolutionResult::resolved(id.clone(), MatchedBy::Default);
        }

        self.diagnostics
            .warn(&format!("responsible not resolved for order {}", order.id));
        ResolutionResult::Unresolved
    }

    /// Weekday schedule rule. The two cutover windows pin the lookup to the
    /// boundary day's entry; every other day/time combination consults the
    /// plain per-weekday table, so a populated weekday entry dominates the
    /// later rules on any day.
    fn match_schedule(config: &MappingConfig, now: LocalTime) -> Option<&ResponsibleId> {
        if now.weekday == MONDAY && (now.hour, now.minute) >= MONDAY_HANDOVER {
            return config.by_weekday.get(weekday_key(MONDAY));
        }

        if now.weekday == FRIDAY && (now.hour, now.minute) >= FRIDAY_HANDOVER {
            return config.by_weekday.get(weekday_key(FRIDAY));
        }

        config.by_weekday.get(weekday_key(now.weekday))
    }

    fn match_tag<'a>(config: &'a MappingConfig, order: &Order) -> Option<&'a ResponsibleId> {
        order
            .tag_list()
            .into_iter()
            .find_map(|tag| config.by_tag.get(tag))
    }

    fn match_country<'a>(config: &'a MappingConfig, order: &Order) -> Option<&'a ResponsibleId> {
        order
            .country_code()
            .and_then(|code| config.by_country_code.get(code))
    }

    fn match_source<'a>(config: &'a MappingConfig, order: &Order) -> Option<&'a ResponsibleId> {
        order
            .source_name
            .as_deref()
            .filter(|source| !source.is_empty())
            .and_then(|source| config.by_source.get(source))
    }
}

/// Mapping documents key the weekday table by "0" (Sunday) through "6".
fn weekday_key(weekday: u8) -> &'static str {
    match weekday {
        0 => "0",
        1 => "1",
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        _ => "6",
    }
}
