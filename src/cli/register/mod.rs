//! Register command - builds a person and stores it in an in-memory repository

use std::sync::Arc;

use chrono::NaiveDate;
use clap::Args;
use tracing::info;

use crate::infrastructure::person::{
    AddressRequest, InMemoryPersonRepository, RegisterPersonRequest, RegistrationService,
};

/// Arguments for the register command
#[derive(Args, Clone, Debug)]
pub struct RegisterArgs {
    /// Full name
    #[arg(long)]
    pub name: String,

    /// National ID number, formatted as DDD.DDD.DDD-DD
    #[arg(long)]
    pub national_id: String,

    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    pub birth_date: NaiveDate,

    /// Email address
    #[arg(long)]
    pub email: String,

    /// Postal code, formatted as DDDDD-DDD
    #[arg(long)]
    pub postal_code: Option<String>,

    /// House number
    #[arg(long, requires = "postal_code")]
    pub number: Option<i32>,

    /// Address complement
    #[arg(long, requires = "postal_code")]
    pub complement: Option<String>,
}

impl RegisterArgs {
    pub fn into_request(self) -> RegisterPersonRequest {
        let address = self.postal_code.map(|postal_code| AddressRequest {
            postal_code,
            number: self.number,
            complement: self.complement,
        });

        RegisterPersonRequest {
            name: self.name,
            national_id: self.national_id,
            birth_date: self.birth_date,
            email: self.email,
            address,
        }
    }
}

/// Run the register command
pub async fn run(args: RegisterArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();

    let repository = Arc::new(InMemoryPersonRepository::new());
    let service = RegistrationService::new(repository)
        .with_revalidation(config.registration.revalidate_on_save);

    let person = service.register(args.into_request()).await?;
    info!("Registration complete");

    println!("{}", serde_json::to_string_pretty(&person)?);

    Ok(())
}
