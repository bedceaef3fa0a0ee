pub mod command;

use std::io::{self, Write};

use clap::Parser;
use dotenv::dotenv;

use crate::domain::contact::{Contact, ValidationReq};
use crate::errors::AppError;
use crate::store::{
    ContactStore, parse_store,
    storage_port::{export_contacts_to_csv, import_contacts_from_csv},
};
use crate::validation::{validate_email, validate_name};
use command::{Cli, Commands};

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();

    let cli = Cli::parse();
    let mut store = parse_store(&cli.store, &cli.path)?;

    match cli.command {
        Some(command) => run_command(store.as_mut(), command),
        None => run_menu(store.as_mut()),
    }
}

fn run_command(store: &mut dyn ContactStore, command: Commands) -> Result<(), AppError> {
    match command {
        Commands::Add { name, email, id } => {
            let name = name.trim().to_string();
            let email = email.trim().to_string();

            if !validate_name(&name) {
                return Err(AppError::Validation(ValidationReq::name_req()));
            }
            if !validate_email(&email) {
                return Err(AppError::Validation(ValidationReq::email_req()));
            }

            let id = match id {
                Some(0) => {
                    return Err(AppError::Validation(
                        "--id must be a positive integer".to_string(),
                    ));
                }
                Some(id) => {
                    store.add_with_id(Contact { id, name, email })?;
                    id
                }
                None => store.add(Contact::new(name, email))?,
            };

            println!("Contact added with id {id}");
            Ok(())
        }

        Commands::List => {
            list_contacts(store);
            Ok(())
        }

        Commands::Get { id } => {
            let contact = store.get_by_id(id)?;
            println!("{}", display_contact(contact));
            Ok(())
        }

        Commands::Update { id, name, email } => {
            let name = name.unwrap_or_default();
            let email = email.unwrap_or_default();

            store.update(id, name.trim(), email.trim())?;
            println!("Contact updated");
            Ok(())
        }

        Commands::Delete { id } => {
            store.delete(id)?;
            println!("Contact deleted");
            Ok(())
        }

        Commands::Import { src } => {
            let (path, count) = import_contacts_from_csv(store, src.as_deref())?;
            println!("Imported {count} contact(s) from {}", path.display());
            Ok(())
        }

        Commands::Export { des } => {
            let (path, count) = export_contacts_to_csv(&store.get_all(), des.as_deref())?;
            println!("Exported {count} contact(s) to {}", path.display());
            Ok(())
        }
    }
}

enum MenuChoice {
    AddContact,
    ListContacts,
    ShowContact,
    UpdateContact,
    DeleteContact,
    Exit,
}

fn run_menu(store: &mut dyn ContactStore) -> Result<(), AppError> {
    println!("\n--- Mini CRM ---");

    loop {
        let choice = match parse_menu_choice() {
            Ok(choice) => choice,
            Err(err @ AppError::ParseCommand(_)) => {
                eprintln!("{err}");
                continue;
            }
            Err(err) => return Err(err),
        };

        let outcome = match choice {
            MenuChoice::AddContact => menu_add(store),
            MenuChoice::ListContacts => {
                list_contacts(store);
                Ok(())
            }
            MenuChoice::ShowContact => menu_show(store),
            MenuChoice::UpdateContact => menu_update(store),
            MenuChoice::DeleteContact => menu_delete(store),
            MenuChoice::Exit => {
                println!("\nBye!");
                return Ok(());
            }
        };

        // Recoverable errors go back to the menu; the store stays usable
        if let Err(err) = outcome {
            eprintln!("{err}");
        }
    }
}

fn parse_menu_choice() -> Result<MenuChoice, AppError> {
    println!();
    println!("1. Add Contact");
    println!("2. List Contacts");
    println!("3. Show Contact");
    println!("4. Update Contact");
    println!("5. Delete Contact");
    println!("6. Exit");
    print!("> ");
    io::stdout().flush()?;

    let choice = get_input()?;

    match choice.as_str() {
        "1" => Ok(MenuChoice::AddContact),
        "2" => Ok(MenuChoice::ListContacts),
        "3" => Ok(MenuChoice::ShowContact),
        "4" => Ok(MenuChoice::UpdateContact),
        "5" => Ok(MenuChoice::DeleteContact),
        "6" => Ok(MenuChoice::Exit),
        _ => Err(AppError::ParseCommand(choice)),
    }
}

fn menu_add(store: &mut dyn ContactStore) -> Result<(), AppError> {
    let name = prompt("Name")?;
    if !validate_name(&name) {
        return Err(AppError::Validation(ValidationReq::name_req()));
    }

    let email = prompt("Email")?;
    if !validate_email(&email) {
        return Err(AppError::Validation(ValidationReq::email_req()));
    }

    let id = store.add(Contact::new(name, email))?;
    println!("Contact added with id {id}");
    Ok(())
}

fn menu_show(store: &mut dyn ContactStore) -> Result<(), AppError> {
    let id = prompt_for_id("Id")?;
    let contact = store.get_by_id(id)?;

    println!("{}", display_contact(contact));
    Ok(())
}

fn menu_update(store: &mut dyn ContactStore) -> Result<(), AppError> {
    let id = prompt_for_id("Id to update")?;
    let current = store.get_by_id(id)?;

    println!("Current name: {} (leave empty to keep)", current.name);
    let name = prompt("New name")?;

    println!("Current email: {} (leave empty to keep)", current.email);
    let email = prompt("New email")?;

    store.update(id, &name, &email)?;
    println!("Contact updated");
    Ok(())
}

fn menu_delete(store: &mut dyn ContactStore) -> Result<(), AppError> {
    let id = prompt_for_id("Id to delete")?;

    store.delete(id)?;
    println!("Contact deleted");
    Ok(())
}

fn list_contacts(store: &dyn ContactStore) {
    let contacts = store.get_all();

    if contacts.is_empty() {
        println!("No contact yet");
        return;
    }

    for contact in contacts {
        println!("{}", listing_line(contact));
    }
}

fn listing_line(contact: &Contact) -> String {
    format!(
        "{:>3}. {:<20} {:<30}",
        contact.id, contact.name, contact.email
    )
}

fn display_contact(contact: &Contact) -> String {
    format!(
        "Id: {}\n\
        Name: {}\n\
        Email: {}",
        contact.id, contact.name, contact.email
    )
}

// INPUT FUNCTIONS
fn get_input() -> Result<String, AppError> {
    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;

    // Zero bytes means stdin is closed; bail out instead of looping on it
    if read == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed",
        )));
    }
    Ok(input.trim().to_string())
}

fn prompt(label: &str) -> Result<String, AppError> {
    print!("{label}: ");
    io::stdout().flush()?;
    get_input()
}

fn prompt_for_id(label: &str) -> Result<u32, AppError> {
    let value = prompt(label)?;
    Ok(value.parse::<u32>()?)
}
