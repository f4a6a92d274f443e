use crate::api::{self, ApiClient};
use crate::cli::parser::EmployeeCmd;
use crate::config::Config;
use crate::core::profile::{self, ProfileEdit, ProfileLogic};
use crate::errors::AppResult;

pub fn handle(cmd: &EmployeeCmd, cfg: &Config) -> AppResult<()> {
    let api = ApiClient::new(cfg)?;

    match cmd {
        EmployeeCmd::Show { id } => {
            let employee = ProfileLogic::fetch(&api, *id)?;
            ProfileLogic::show(&employee);
        }

        EmployeeCmd::Update { id, number, name, email, dni, vacations, on_leave } => {
            let edit = ProfileEdit {
                numero: number.clone(),
                nombre: name.clone(),
                email: email.clone(),
                dni: dni.clone(),
                en_vacaciones: *vacations,
                de_baja: *on_leave,
            };
            ProfileLogic::update(&api, *id, &edit)?;
        }

        EmployeeCmd::Del { id, yes } => {
            ProfileLogic::delete(&api, *id, *yes)?;
        }

        EmployeeCmd::List { page, size, order, desc, number, name, email, working, all } => {
            let filter = profile::filter_from(
                number.clone(),
                name.clone(),
                email.clone(),
                *working,
            );
            if *all {
                for e in api::employees::list_filtered(&api, &filter)? {
                    println!("{}", e.summary());
                }
            } else {
                let result =
                    api::employees::page_filtered(&api, &filter, *page, *size, order, !*desc)?;
                print!("{}", ProfileLogic::render_page(&result));
            }
        }

        EmployeeCmd::Find { number } => {
            let id = api::employees::id_by_number(&api, number)?;
            println!("{id}");
        }

        EmployeeCmd::Passwd { id, old, new } => {
            ProfileLogic::change_password(&api, *id, old, new)?;
        }

        EmployeeCmd::ResetPassword { id } => {
            ProfileLogic::reset_password(&api, *id)?;
        }

        EmployeeCmd::SetPassword { id, password } => {
            ProfileLogic::set_password(&api, *id, password)?;
        }
    }
    Ok(())
}
