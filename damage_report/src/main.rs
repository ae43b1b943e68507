//! damage_report - print stats and daily damage for one snapshot
//!
//! Reads an already-materialized user snapshot and task list from
//! JSON files (the shape the enrichment layer produces) and prints
//! the aggregated stats, the daily-damage simulation, and the todos
//! due by the end of today.
//!
//! Usage: damage_report <user.json> <tasks.json>

use chrono::Utc;
use habit_core::{
    todos_due_today, Attribute, DailyDamageSimulator, Stats, Task, UserSnapshot,
};
use std::error::Error;
use std::fs;
use std::process;

fn main() {
    if let Err(err) = run() {
        eprintln!("damage_report: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let (user_path, tasks_path) = match (args.next(), args.next()) {
        (Some(user), Some(tasks)) => (user, tasks),
        _ => return Err("usage: damage_report <user.json> <tasks.json>".into()),
    };

    let user: UserSnapshot = serde_json::from_str(&fs::read_to_string(&user_path)?)?;
    let tasks: Vec<Task> = serde_json::from_str(&fs::read_to_string(&tasks_path)?)?;

    let stats = user.compute_stats();
    print_stats(&user, &stats);

    let daily_stats = DailyDamageSimulator::new().simulate(&user, &tasks)?;
    println!("Dailies");
    println!("  due:             {}", daily_stats.due_count);
    println!("  evaded:          {}", daily_stats.dailies_evaded);
    println!("  self damage:     {:.1}", daily_stats.daily_damage_to_self);
    println!("  boss damage:     {:.1}", daily_stats.boss_damage);
    println!("  total damage:    {:.1}", daily_stats.total_damage_to_self);
    println!();

    let due_today = todos_due_today(&tasks, Utc::now());
    println!("Todos due today: {}", due_today.len());
    for todo in due_today {
        println!("  - {}", if todo.text.is_empty() { &todo.id } else { &todo.text });
    }

    Ok(())
}

fn print_stats(user: &UserSnapshot, stats: &Stats) {
    println!(
        "{} (level {})",
        if user.class_name.is_empty() { "hero" } else { &user.class_name },
        user.level
    );
    println!("  {:<14} {:>7} {:>7} {:>7} {:>7}", "", "armor", "buffs", "points", "total");
    for &attribute in Attribute::all() {
        println!(
            "  {:<14} {:>7.1} {:>7.1} {:>7.1} {:>7.1}",
            format!("{attribute:?}"),
            stats.armor.get(attribute),
            stats.buffs.get(attribute),
            stats.points.get(attribute),
            stats.totals.get(attribute),
        );
    }
    println!("  constitution bonus: {:.3}", stats.constitution_bonus());
    println!();
}
