//! Proximity ranking of events around a reference coordinate.
//!
//! [`rank`] orders events by ascending great-circle distance from the
//! reference. When no reference is available the events are returned in
//! their original order as [`Ranking::Unranked`], so callers can tell the
//! two outcomes apart while still iterating a single sequence.

use crate::{Coordinate, Distance, Event, EventId, distance_between};

/// An event paired with its distance from the reference coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedEvent<'a> {
    /// The ranked event.
    pub event: &'a Event,
    /// Distance from the reference coordinate.
    pub distance: Distance,
}

/// Result of a ranking request.
#[derive(Debug, Clone, PartialEq)]
pub enum Ranking<'a> {
    /// Events sorted by ascending distance; ties keep input order.
    Ranked(Vec<RankedEvent<'a>>),
    /// No reference coordinate was available; events keep input order.
    Unranked(Vec<&'a Event>),
}

impl<'a> Ranking<'a> {
    /// Whether distances were computed.
    #[must_use]
    pub const fn is_ranked(&self) -> bool {
        matches!(self, Self::Ranked(_))
    }

    /// Number of events in the ranking.
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::Ranked(items) => items.len(),
            Self::Unranked(items) => items.len(),
        }
    }

    /// Whether the ranking holds no events.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Events in presentation order, regardless of variant.
    pub fn events(&self) -> impl Iterator<Item = &'a Event> + '_ {
        self.entries().map(|(event, _)| event)
    }

    /// Events with their distance when one was computed.
    #[must_use]
    pub fn entries(&self) -> Box<dyn Iterator<Item = (&'a Event, Option<Distance>)> + '_> {
        match self {
            Self::Ranked(items) => Box::new(items.iter().map(|r| (r.event, Some(r.distance)))),
            Self::Unranked(items) => Box::new(items.iter().map(|e| (*e, None))),
        }
    }

    /// Distance for the event with `id`, if ranked and present.
    #[must_use]
    pub fn distance_of(&self, id: &EventId) -> Option<Distance> {
        match self {
            Self::Ranked(items) => items
                .iter()
                .find(|r| &r.event.id == id)
                .map(|r| r.distance),
            Self::Unranked(_) => None,
        }
    }
}

/// Rank `events` by distance from `reference`.
///
/// Distances are recomputed on every call; nothing is cached. The input is
/// neither filtered nor mutated. A `None` reference skips ranking.
///
/// # Examples
/// ```
/// use svirke_core::{Coordinate, Event, EventDetails, EventId, rank};
///
/// fn event(id: &str, lat: f64, lng: f64) -> Event {
///     Event::new(
///         EventId::new(id),
///         EventDetails {
///             performer: id.into(),
///             venue: "Klub".into(),
///             city: "Beograd".into(),
///             genre: "jazz".into(),
///             time: "20:00".into(),
///             date: None,
///             location: Coordinate::new(lat, lng),
///         },
///     )
/// }
///
/// let events = vec![event("far", 45.0, 20.0), event("near", 44.81, 20.46)];
/// let ranking = rank(Some(Coordinate::new(44.8125, 20.4612)), &events);
/// let order: Vec<_> = ranking.events().map(|e| e.id.as_str()).collect();
/// assert_eq!(order, ["near", "far"]);
///
/// let unranked = rank(None, &events);
/// assert!(!unranked.is_ranked());
/// ```
#[must_use]
pub fn rank(reference: Option<Coordinate>, events: &[Event]) -> Ranking<'_> {
    rank_by(reference, events)
}

/// Rank any sequence of borrowed events, such as a filtered view.
#[must_use]
pub fn rank_by<'a, I>(reference: Option<Coordinate>, events: I) -> Ranking<'a>
where
    I: IntoIterator<Item = &'a Event>,
{
    let Some(origin) = reference else {
        log::debug!("no reference coordinate; keeping arrival order");
        return Ranking::Unranked(events.into_iter().collect());
    };

    let mut ranked: Vec<RankedEvent<'a>> = events
        .into_iter()
        .map(|event| RankedEvent {
            event,
            distance: distance_between(origin, event.location()),
        })
        .collect();
    // `sort_by_key` is stable, so equal distances keep their input order.
    ranked.sort_by_key(|r| r.distance);
    log::debug!("ranked {} events by distance", ranked.len());
    Ranking::Ranked(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::event_at;
    use rstest::{fixture, rstest};

    #[fixture]
    fn belgrade() -> Coordinate {
        Coordinate::new(44.8125, 20.4612)
    }

    #[fixture]
    fn events() -> Vec<Event> {
        vec![
            event_at("novi-sad", 45.2671, 19.8335),
            event_at("centar", 44.8150, 20.4650),
            event_at("nis", 43.3209, 21.8958),
            event_at("zemun", 44.8430, 20.4010),
        ]
    }

    fn ids<'a>(ranking: &'a Ranking<'a>) -> Vec<&'a str> {
        ranking.events().map(|e| e.id.as_str()).collect()
    }

    #[rstest]
    fn orders_by_ascending_distance(belgrade: Coordinate, events: Vec<Event>) {
        let ranking = rank(Some(belgrade), &events);
        assert!(ranking.is_ranked());
        assert_eq!(ids(&ranking), ["centar", "zemun", "novi-sad", "nis"]);
    }

    #[rstest]
    fn reranking_sorted_input_is_identity(belgrade: Coordinate, events: Vec<Event>) {
        let ranking = rank(Some(belgrade), &events);
        let sorted: Vec<Event> = ranking.events().cloned().collect();
        let again = rank(Some(belgrade), &sorted);
        assert_eq!(ids(&again), ids(&ranking));
    }

    #[rstest]
    fn missing_reference_keeps_input_order(events: Vec<Event>) {
        let ranking = rank(None, &events);
        assert!(!ranking.is_ranked());
        assert_eq!(ids(&ranking), ["novi-sad", "centar", "nis", "zemun"]);
        assert!(ranking.entries().all(|(_, distance)| distance.is_none()));
    }

    #[rstest]
    fn equal_distances_keep_input_order() {
        let events = vec![
            event_at("east", 0.0, 1.0),
            event_at("west", 0.0, -1.0),
            event_at("north", 1.0, 0.0),
        ];
        let ranking = rank(Some(Coordinate::new(0.0, 0.0)), &events);
        assert_eq!(ids(&ranking), ["east", "west", "north"]);
    }

    #[rstest]
    fn empty_input_yields_empty_ranking(belgrade: Coordinate) {
        let ranking = rank(Some(belgrade), &[]);
        assert!(ranking.is_ranked());
        assert!(ranking.is_empty());
    }

    #[rstest]
    fn distance_lookup_requires_ranking(belgrade: Coordinate, events: Vec<Event>) {
        let id = EventId::new("centar");
        let ranked = rank(Some(belgrade), &events);
        let distance = ranked.distance_of(&id).expect("ranked distance");
        assert_eq!(distance.to_string(), "409m");
        assert_eq!(rank(None, &events).distance_of(&id), None);
    }

    #[rstest]
    fn ranks_filtered_views(belgrade: Coordinate, events: Vec<Event>) {
        let view = events.iter().filter(|e| e.id.as_str() != "centar");
        let ranking = rank_by(Some(belgrade), view);
        assert_eq!(ids(&ranking), ["zemun", "novi-sad", "nis"]);
    }
}
