//! End-to-end progression scenarios driven through the engine facade.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::rc::Rc;

use chrono::{Duration, NaiveDate};
use vitalia_engine::{
    AvatarId, DailyRecord, DashboardEngine, Goal, Metric, ProgressStorage, ProgressionLedger,
    UserId,
};

#[derive(Clone, Default)]
struct MemoryStore {
    goals: Rc<RefCell<BTreeMap<String, Goal>>>,
    records: Rc<RefCell<BTreeMap<(String, NaiveDate), DailyRecord>>>,
    ledgers: Rc<RefCell<BTreeMap<String, ProgressionLedger>>>,
}

impl ProgressStorage for MemoryStore {
    type Error = Infallible;

    fn active_goal(&self, user: &UserId) -> Result<Option<Goal>, Self::Error> {
        Ok(self.goals.borrow().get(user.as_str()).cloned())
    }

    fn save_goal(&self, user: &UserId, goal: &Goal) -> Result<Goal, Self::Error> {
        self.goals
            .borrow_mut()
            .insert(user.as_str().to_string(), goal.clone());
        Ok(goal.clone())
    }

    fn load_or_create_record(
        &self,
        user: &UserId,
        date: NaiveDate,
    ) -> Result<DailyRecord, Self::Error> {
        Ok(self
            .records
            .borrow_mut()
            .entry((user.as_str().to_string(), date))
            .or_insert_with(|| DailyRecord::new(date))
            .clone())
    }

    fn load_or_create_ledger(&self, user: &UserId) -> Result<ProgressionLedger, Self::Error> {
        Ok(self
            .ledgers
            .borrow_mut()
            .entry(user.as_str().to_string())
            .or_insert_with(ProgressionLedger::new)
            .clone())
    }

    fn save_record(&self, user: &UserId, record: &DailyRecord) -> Result<DailyRecord, Self::Error> {
        self.records
            .borrow_mut()
            .insert((user.as_str().to_string(), record.date), record.clone());
        Ok(record.clone())
    }

    fn save_ledger(
        &self,
        user: &UserId,
        ledger: &ProgressionLedger,
    ) -> Result<ProgressionLedger, Self::Error> {
        self.ledgers
            .borrow_mut()
            .insert(user.as_str().to_string(), ledger.clone());
        Ok(ledger.clone())
    }

    fn recent_records(
        &self,
        user: &UserId,
        limit: usize,
    ) -> Result<Vec<DailyRecord>, Self::Error> {
        let records: Vec<DailyRecord> = self
            .records
            .borrow()
            .iter()
            .filter(|((u, _), _)| u == user.as_str())
            .rev()
            .take(limit)
            .map(|(_, r)| r.clone())
            .collect();
        Ok(records)
    }
}

fn start_date() -> NaiveDate {
    init_logs();
    NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()
}

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Both goals completed daily: 125 xp per day. Day thresholds are 100, 200,
/// 300... so level-ups land exactly where the linear curve predicts.
#[test]
fn two_weeks_of_perfect_days_climb_the_curve() {
    let engine = DashboardEngine::new(MemoryStore::default());
    let user = UserId::new("carla@example.com");

    let mut level_up_days = Vec::new();
    for offset in 0..14 {
        let day = start_date() + Duration::days(offset);
        let water = engine
            .log_consumption_on(&user, day, Metric::Water, 2000)
            .unwrap();
        assert_eq!(water.xp_award, 50);
        let calories = engine
            .log_consumption_on(&user, day, Metric::Calories, 2000)
            .unwrap();
        assert_eq!(calories.xp_award, 75);
        for event in water.level_ups.iter().chain(calories.level_ups.iter()) {
            level_up_days.push((offset, event.new_level));
        }
    }

    let snapshot = engine.snapshot_on(&user, start_date()).unwrap();
    // 14 days * 125 xp = 1750 lifetime xp; 100+200+300+400+500 spent on
    // levels 2..=6 leaves 250 toward level 7.
    assert_eq!(snapshot.ledger.total_xp, 1750);
    assert_eq!(snapshot.ledger.current_level, 6);
    assert_eq!(snapshot.ledger.current_xp, 250);
    assert_eq!(snapshot.ledger.avatar, AvatarId::Runner);
    let levels: Vec<u32> = level_up_days.iter().map(|(_, l)| *l).collect();
    assert_eq!(levels, [2, 3, 4, 5, 6]);
}

#[test]
fn partial_days_award_only_completed_metrics() {
    let engine = DashboardEngine::new(MemoryStore::default());
    let user = UserId::new("diego@example.com");
    let day = start_date();

    // Morning: a few glasses of water, lunch logged.
    engine
        .log_consumption_on(&user, day, Metric::Water, 750)
        .unwrap();
    engine
        .log_consumption_on(&user, day, Metric::Calories, 900)
        .unwrap();
    // Evening: water goal reached, calories still short.
    let outcome = engine
        .log_consumption_on(&user, day, Metric::Water, 2100)
        .unwrap();
    assert_eq!(outcome.xp_award, 50);

    let snapshot = engine.snapshot_on(&user, day).unwrap();
    assert!(snapshot.record.water_goal_achieved);
    assert!(!snapshot.record.calories_goal_achieved);
    assert_eq!(snapshot.record.xp_earned, 50);
    assert_eq!(snapshot.ledger.current_level, 1);
}

#[test]
fn custom_goal_changes_the_transition_point() {
    let engine = DashboardEngine::new(MemoryStore::default());
    let user = UserId::new("elisa@example.com");
    let day = start_date();

    engine.update_goal(&user, 1500, 2500).unwrap();

    let outcome = engine
        .log_consumption_on(&user, day, Metric::Water, 1500)
        .unwrap();
    assert_eq!(outcome.xp_award, 50);

    // 2000 kcal would have completed the default goal but not this one.
    let outcome = engine
        .log_consumption_on(&user, day, Metric::Calories, 2000)
        .unwrap();
    assert_eq!(outcome.xp_award, 0);
    let outcome = engine
        .log_consumption_on(&user, day, Metric::Calories, 2500)
        .unwrap();
    assert_eq!(outcome.xp_award, 75);
}

#[test]
fn latest_level_up_feeds_the_animation_trigger() {
    let engine = DashboardEngine::new(MemoryStore::default());
    let user = UserId::new("fabio@example.com");

    // Day one: both goals, 125 xp, level 2 at the 100 mark.
    let day = start_date();
    let water = engine
        .log_consumption_on(&user, day, Metric::Water, 2000)
        .unwrap();
    assert!(water.latest_level_up().is_none());
    let calories = engine
        .log_consumption_on(&user, day, Metric::Calories, 2000)
        .unwrap();
    let event = calories.latest_level_up().expect("crossed 100 xp");
    assert_eq!(event.new_level, 2);
    assert_eq!(event.new_avatar, Some(AvatarId::Seedling));
}

#[test]
fn history_reflects_the_full_month() {
    let engine = DashboardEngine::new(MemoryStore::default());
    let user = UserId::new("gina@example.com");

    // 10 days: water goal met every day, calories every other day.
    for offset in 0..10 {
        let day = start_date() + Duration::days(offset);
        engine
            .log_consumption_on(&user, day, Metric::Water, 2000)
            .unwrap();
        let kcal = if offset % 2 == 0 { 2200 } else { 1400 };
        engine
            .log_consumption_on(&user, day, Metric::Calories, kcal)
            .unwrap();
    }

    let summary = engine.history(&user).unwrap();
    assert_eq!(summary.total_days, 10);
    assert_eq!(summary.water_goals_achieved, 10);
    assert_eq!(summary.calorie_goals_achieved, 5);
    // 10 * 50 + 5 * 75
    assert_eq!(summary.total_xp_earned, 875);
}
