use crate::commands::{to_json, Context};
use crate::error::{invalid_input, not_found};
use addrbook_core::{Phone, Record};
use anyhow::Result;

pub fn add_contact(ctx: &mut Context<'_>, args: &[&str]) -> Result<String> {
    let [name, phone, ..] = args else {
        return Err(invalid_input("Give me name and phone please."));
    };

    if let Some(record) = ctx.directory.find_mut(name) {
        record.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    // Validated before the record exists so a bad number leaves no empty contact.
    let phone = Phone::new(phone)?;
    let mut record = Record::new(*name);
    record.phones.push(phone);
    ctx.directory.add(record);
    Ok("Contact added.".to_string())
}

pub fn change_contact(ctx: &mut Context<'_>, args: &[&str]) -> Result<String> {
    let [name, old_phone, new_phone, ..] = args else {
        return Err(invalid_input("Give me name, old phone and new phone please."));
    };
    let record = ctx
        .directory
        .find_mut(name)
        .ok_or_else(|| not_found(format!("contact {name}")))?;
    record.edit_phone(old_phone, new_phone)?;
    Ok("Contact updated.".to_string())
}

pub fn show_contact(ctx: &mut Context<'_>, args: &[&str]) -> Result<String> {
    let [name, ..] = args else {
        return Err(invalid_input("Give me a name please."));
    };
    let record = ctx
        .directory
        .find(name)
        .ok_or_else(|| not_found(format!("contact {name}")))?;
    if ctx.json {
        return to_json(record);
    }
    Ok(record.to_string())
}

pub fn all_contacts(ctx: &mut Context<'_>) -> Result<String> {
    if ctx.json {
        let records: Vec<&Record> = ctx.directory.iter().collect();
        return to_json(&records);
    }
    if ctx.directory.is_empty() {
        return Ok("No contacts.".to_string());
    }
    let listing = ctx.directory.to_string();
    Ok(listing.strip_suffix('\n').unwrap_or(&listing).to_string())
}

pub fn delete_contact(ctx: &mut Context<'_>, args: &[&str]) -> Result<String> {
    let [name, ..] = args else {
        return Err(invalid_input("Give me a name please."));
    };
    ctx.directory.delete(name)?;
    Ok("Contact deleted.".to_string())
}

pub fn remove_phone(ctx: &mut Context<'_>, args: &[&str]) -> Result<String> {
    let [name, phone, ..] = args else {
        return Err(invalid_input("Give me name and phone please."));
    };
    let record = ctx
        .directory
        .find_mut(name)
        .ok_or_else(|| not_found(format!("contact {name}")))?;
    record.remove_phone(phone)?;
    Ok("Phone removed.".to_string())
}
