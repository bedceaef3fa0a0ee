use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mini-crm", version, about = "Minimal contact book with JSON persistence")]
pub struct Cli {
    /// Storage backend (mem, json) are available
    #[arg(long, env = "STORE_BACKEND", default_value_t = String::from("json"))]
    pub store: String,

    /// Path of the JSON contacts file
    #[arg(long, env = "CONTACTS_PATH", default_value_t = String::from("./data/contacts.json"))]
    pub path: String,

    /// One-shot subcommand; the interactive menu starts when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact email address
        #[arg(long)]
        email: String,

        /// Explicit identifier; the store assigns the next free one when omitted
        #[arg(long)]
        id: Option<u32>,
    },

    /// List contacts ordered by ascending id
    List,

    /// Show a single contact by id
    Get {
        /// Contact identifier
        #[arg(long)]
        id: u32,
    },

    /// Edit the data of an existing contact
    /// Omitted fields keep their current value
    Update {
        /// Identifier of the contact to update
        #[arg(long)]
        id: u32,

        /// Update name
        #[arg(long)]
        name: Option<String>,

        /// Update email address
        #[arg(long)]
        email: Option<String>,
    },

    /// Delete a contact by id
    Delete {
        /// Identifier of the contact to delete
        #[arg(long)]
        id: u32,
    },

    /// Import contacts from a .csv file
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: Option<String>,
    },

    /// Export contacts to a .csv file
    Export {
        /// File path to the destination location for the export file
        #[arg(short, long)]
        des: Option<String>,
    },
}
