//! DailyDamageSimulator - damage dealt by neglected dailies

use super::DailyStats;
use crate::config::SimConstants;
use crate::task::{Task, TaskError};
use crate::user::UserSnapshot;

/// Simulates the damage a hero takes from due, incomplete dailies
///
/// Each run walks the task list in order: the first N in-scope dailies
/// are evaded for free while stealth charges last, the rest deal
/// self-damage scaled by constitution and priority, and contribute to
/// the party's boss-damage pool when a boss quest is active.
#[derive(Debug, Clone, Default)]
pub struct DailyDamageSimulator {
    constants: SimConstants,
}

impl DailyDamageSimulator {
    /// Create a simulator with the game's reference constants
    pub fn new() -> Self {
        DailyDamageSimulator {
            constants: SimConstants::default(),
        }
    }

    /// Create a simulator with custom constants
    pub fn with_constants(constants: SimConstants) -> Self {
        DailyDamageSimulator { constants }
    }

    /// Run the simulation for one snapshot and task list
    ///
    /// Validates every task up front; an invalid task aborts the run
    /// before any accumulation, so the caller's previous result stays
    /// the last published value.
    pub fn simulate(&self, user: &UserSnapshot, tasks: &[Task]) -> Result<DailyStats, TaskError> {
        for task in tasks {
            task.validate()?;
        }

        let con_bonus = user.compute_stats().constitution_bonus();
        let boss = user.quest.boss();
        let mut stealth_remaining = user.buffs.stealth;
        let mut stats = DailyStats::default();

        for task in tasks {
            if !task.is_due_daily() {
                continue;
            }

            if stealth_remaining > 0 {
                stealth_remaining -= 1;
                stats.dailies_evaded += 1;
                continue;
            }

            stats.due_count += 1;

            let value = task
                .value
                .clamp(self.constants.value_floor, self.constants.value_ceiling);
            let mut task_damage = self.constants.decay_base.powf(value).abs();

            // each completed subtask shaves off an equal share
            if !task.checklist.is_empty() {
                let share = task_damage / task.checklist.len() as f64;
                for item in &task.checklist {
                    if item.completed {
                        task_damage -= share;
                    }
                }
            }

            let damage = task_damage * con_bonus * task.priority * self.constants.priority_scale;
            // the game rounds each task's contribution before summing
            stats.daily_damage_to_self += round_tenth(damage);

            if let Some(boss) = boss {
                // easy tasks are dampened for the boss, hard ones are
                // not amplified past the raw curve
                let scaled = if task.priority < 1.0 {
                    task_damage * task.priority
                } else {
                    task_damage
                };
                stats.boss_damage += scaled * boss.strength;
            }
        }

        stats.total_damage_to_self = ceil_tenth(stats.daily_damage_to_self + stats.boss_damage);
        stats.boss_damage = ceil_tenth(stats.boss_damage);

        Ok(stats)
    }
}

/// Round to the nearest tenth
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round up to the nearest tenth
fn ceil_tenth(value: f64) -> f64 {
    (value * 10.0).ceil() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskType;
    use crate::user::{BossInfo, QuestState};

    fn daily(value: f64) -> Task {
        Task::new(TaskType::Daily).with_due(true).with_value(value)
    }

    fn simulate(user: &UserSnapshot, tasks: &[Task]) -> DailyStats {
        DailyDamageSimulator::new()
            .simulate(user, tasks)
            .expect("valid tasks should simulate")
    }

    #[test]
    fn test_empty_task_list_deals_nothing() {
        let stats = simulate(&UserSnapshot::default(), &[]);
        assert_eq!(stats, DailyStats::default());
    }

    #[test]
    fn test_fresh_daily_damage() {
        // value 0, priority 1, no mitigation: |0.9747^0| * 2 = 2.0
        let stats = simulate(&UserSnapshot::default(), &[daily(0.0)]);
        assert_eq!(stats.due_count, 1);
        assert!((stats.daily_damage_to_self - 2.0).abs() < 1e-9);
        assert!((stats.total_damage_to_self - 2.0).abs() < 1e-9);
        assert!((stats.boss_damage - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_neglected_daily_hits_harder() {
        // 0.9747^-10 * 2 = 2.584..., rounded per task to 2.6
        let stats = simulate(&UserSnapshot::default(), &[daily(-10.0)]);
        assert!((stats.daily_damage_to_self - 2.6).abs() < 1e-9);
    }

    #[test]
    fn test_value_clamped_at_ceiling() {
        // 0.9747^21.27 * 2 = 1.159..., rounded to 1.2
        let stats = simulate(&UserSnapshot::default(), &[daily(21.27)]);
        assert!((stats.daily_damage_to_self - 1.2).abs() < 1e-9);

        let far_above = simulate(&UserSnapshot::default(), &[daily(500.0)]);
        assert_eq!(far_above, stats);
    }

    #[test]
    fn test_value_clamped_at_floor() {
        // 0.9747^-47.27 * 2 = 6.715..., rounded to 6.7
        let stats = simulate(&UserSnapshot::default(), &[daily(-47.27)]);
        assert!((stats.daily_damage_to_self - 6.7).abs() < 1e-9);

        let far_below = simulate(&UserSnapshot::default(), &[daily(-2000.0)]);
        assert_eq!(far_below, stats);
    }

    #[test]
    fn test_constitution_halves_damage() {
        let mut user = UserSnapshot::default();
        user.points.constitution = 125.0;
        // 2.584... * 0.5 = 1.292..., rounded to 1.3
        let stats = simulate(&user, &[daily(-10.0)]);
        assert!((stats.daily_damage_to_self - 1.3).abs() < 1e-9);
    }

    #[test]
    fn test_priority_scales_self_damage() {
        let stats = simulate(
            &UserSnapshot::default(),
            &[daily(0.0).with_priority(2.0)],
        );
        assert!((stats.daily_damage_to_self - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_scope_tasks_are_ignored() {
        let tasks = vec![
            Task::new(TaskType::Habit).with_value(-30.0),
            Task::new(TaskType::Todo).with_due(true).with_value(-30.0),
            Task::new(TaskType::Reward).with_value(-30.0),
            daily(-30.0).with_completed(true),
            Task::new(TaskType::Daily).with_value(-30.0), // not due
        ];
        let stats = simulate(&UserSnapshot::default(), &tasks);
        assert_eq!(stats, DailyStats::default());
    }

    #[test]
    fn test_stealth_evades_earliest_dailies() {
        let mut user = UserSnapshot::default();
        user.buffs.stealth = 2;
        let tasks = vec![daily(-40.0), daily(-40.0), daily(0.0)];

        let stats = simulate(&user, &tasks);
        assert_eq!(stats.dailies_evaded, 2);
        assert_eq!(stats.due_count, 1);
        // only the third, fresh daily deals damage
        assert!((stats.daily_damage_to_self - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_stealth_beyond_due_count_evades_all() {
        let mut user = UserSnapshot::default();
        user.buffs.stealth = 10;
        let stats = simulate(&user, &[daily(0.0), daily(-5.0)]);
        assert_eq!(stats.dailies_evaded, 2);
        assert_eq!(stats.due_count, 0);
        assert!((stats.total_damage_to_self - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_checklist_partial_credit() {
        // half the subtasks done halves the pre-scaling damage:
        // 1.292082... * 2 / 2 = 1.292..., rounded to 1.3
        let stats = simulate(
            &UserSnapshot::default(),
            &[daily(-10.0).with_checklist(&[true, false, true, false])],
        );
        assert!((stats.daily_damage_to_self - 1.3).abs() < 1e-9);
    }

    #[test]
    fn test_complete_checklist_zeroes_damage() {
        let stats = simulate(
            &UserSnapshot::default(),
            &[daily(-10.0).with_checklist(&[true, true, true])],
        );
        assert!(stats.daily_damage_to_self.abs() < 1e-9);
        assert!(stats.total_damage_to_self.abs() < 1e-9);
    }

    #[test]
    fn test_boss_damage_uses_raw_curve() {
        let mut user = UserSnapshot::default();
        user.points.constitution = 125.0; // mitigation must not affect the boss
        user.quest = QuestState::Active {
            boss: Some(BossInfo { strength: 2.5 }),
        };

        // hard daily: boss takes raw * strength, not raw * priority * 2
        let stats = simulate(&user, &[daily(-10.0).with_priority(2.0)]);
        let raw = 0.9747_f64.powf(-10.0).abs();
        assert!((stats.boss_damage - ceil_tenth(raw * 2.5)).abs() < 1e-9);
    }

    #[test]
    fn test_boss_damage_dampens_easy_tasks() {
        let mut user = UserSnapshot::default();
        user.quest = QuestState::Active {
            boss: Some(BossInfo { strength: 2.5 }),
        };

        let stats = simulate(&user, &[daily(-10.0).with_priority(0.1)]);
        let raw = 0.9747_f64.powf(-10.0).abs();
        assert!((stats.boss_damage - ceil_tenth(raw * 0.1 * 2.5)).abs() < 1e-9);
    }

    #[test]
    fn test_quest_without_boss_deals_no_boss_damage() {
        let mut user = UserSnapshot::default();
        user.quest = QuestState::Active { boss: None };
        let stats = simulate(&user, &[daily(-10.0)]);
        assert!((stats.boss_damage - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_totals_round_up_boss_and_grand_total() {
        let mut user = UserSnapshot::default();
        user.points.constitution = 125.0;
        user.quest = QuestState::Active {
            boss: Some(BossInfo { strength: 1.0 }),
        };
        let stats = simulate(&user, &[daily(-10.0), daily(5.0)]);

        // per-task: round(2.584.. * 0.5) = 1.3, round(1.759.. * 0.5) = 0.9
        assert!((stats.daily_damage_to_self - 2.2).abs() < 1e-9);
        // raw boss = 1.29208... + 0.87974... = 2.17182..., ceil to 2.2
        assert!((stats.boss_damage - 2.2).abs() < 1e-9);
        // total = ceil((2.2 + 2.17182...) * 10) / 10 = 4.4
        assert!((stats.total_damage_to_self - 4.4).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_task_aborts_before_any_accumulation() {
        let tasks = vec![daily(0.0), daily(f64::NAN)];
        let result = DailyDamageSimulator::new().simulate(&UserSnapshot::default(), &tasks);
        assert!(matches!(result, Err(TaskError::NonFiniteValue { .. })));
    }

    #[test]
    fn test_invalid_out_of_scope_task_still_rejected() {
        // validation covers the whole list, not just damage-eligible tasks
        let tasks = vec![Task::new(TaskType::Habit).with_priority(-2.0)];
        let result = DailyDamageSimulator::new().simulate(&UserSnapshot::default(), &tasks);
        assert!(matches!(result, Err(TaskError::NegativePriority { .. })));
    }

    #[test]
    fn test_custom_constants_change_the_curve() {
        let constants = SimConstants {
            priority_scale: 4.0,
            ..SimConstants::default()
        };
        let simulator = DailyDamageSimulator::with_constants(constants);
        let stats = simulator
            .simulate(&UserSnapshot::default(), &[daily(0.0)])
            .expect("valid tasks should simulate");
        assert!((stats.daily_damage_to_self - 4.0).abs() < 1e-9);
    }
}
