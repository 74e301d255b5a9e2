use crate::commands::{to_json, Context};
use crate::error::{invalid_input, not_found};
use anyhow::Result;

pub fn add_birthday(ctx: &mut Context<'_>, args: &[&str]) -> Result<String> {
    let [name, birthday, ..] = args else {
        return Err(invalid_input("Give me name and birthday please."));
    };
    let record = ctx
        .directory
        .find_mut(name)
        .ok_or_else(|| not_found(format!("contact {name}")))?;
    record.set_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

pub fn show_birthday(ctx: &mut Context<'_>, args: &[&str]) -> Result<String> {
    let [name, ..] = args else {
        return Err(invalid_input("Give me a name please."));
    };
    let record = ctx
        .directory
        .find(name)
        .ok_or_else(|| not_found(format!("contact {name}")))?;
    match &record.birthday {
        Some(birthday) => Ok(birthday.to_string()),
        None => Ok(format!("No birthday set for {name}.")),
    }
}

pub fn upcoming(ctx: &mut Context<'_>) -> Result<String> {
    let items = ctx.directory.upcoming_birthdays(ctx.today, ctx.window_days);
    if ctx.json {
        return to_json(&items);
    }
    if items.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }
    let lines: Vec<String> = items
        .iter()
        .map(|item| format!("{} - {}", item.name, item.congratulation_date))
        .collect();
    Ok(lines.join("\n"))
}
