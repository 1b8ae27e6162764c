//! Add-vehicle and add-user forms.

use std::collections::BTreeMap;
use std::sync::Arc;

use uavfleet_client::FleetGateway;
use uavfleet_core::error::CoreError;
use uavfleet_core::validation::{form_errors, NewUser, NewVehicle};

use crate::notice::Notice;
use crate::routes::Route;

type FieldErrors = BTreeMap<String, Vec<String>>;

fn invalid_message(err: CoreError) -> String {
    match err {
        CoreError::Validation(msg) => format!("Ошибка: {msg}"),
        other => format!("Ошибка: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Add vehicle
// ---------------------------------------------------------------------------

pub struct AddVehicleForm {
    gateway: Arc<dyn FleetGateway>,
    pub form: NewVehicle,
    submitted: bool,
    pub notice: Notice,
}

impl AddVehicleForm {
    pub fn new(gateway: Arc<dyn FleetGateway>) -> Self {
        Self {
            gateway,
            form: NewVehicle::default(),
            submitted: false,
            notice: Notice::default(),
        }
    }

    /// Messages under the inputs. Nothing is flagged before the first
    /// submit.
    pub fn field_errors(&self) -> FieldErrors {
        if self.submitted {
            form_errors(&self.form)
        } else {
            FieldErrors::new()
        }
    }

    /// Returns `true` when the vehicle was created.
    pub async fn submit(&mut self) -> bool {
        self.submitted = true;
        self.notice.clear();
        if !form_errors(&self.form).is_empty() {
            return false;
        }
        let vehicle = match self.form.clone().into_vehicle() {
            Ok(vehicle) => vehicle,
            Err(err) => {
                self.notice.say(invalid_message(err));
                return false;
            }
        };
        let result = self.gateway.add_vehicle(&vehicle).await;
        let created = self.notice.succeeded(result);
        if created {
            self.notice
                .say(format!("БВС '{}' добавлен", vehicle.vehicle_id));
        }
        created
    }

    pub fn reset(&mut self) {
        self.form = NewVehicle::default();
        self.submitted = false;
    }

    pub fn back(&self) -> Route {
        Route::Vehicles
    }
}

// ---------------------------------------------------------------------------
// Add user
// ---------------------------------------------------------------------------

pub struct AddUserForm {
    gateway: Arc<dyn FleetGateway>,
    pub form: NewUser,
    submitted: bool,
    pub notice: Notice,
}

impl AddUserForm {
    pub fn new(gateway: Arc<dyn FleetGateway>) -> Self {
        Self {
            gateway,
            form: NewUser::default(),
            submitted: false,
            notice: Notice::default(),
        }
    }

    pub fn field_errors(&self) -> FieldErrors {
        if self.submitted {
            form_errors(&self.form)
        } else {
            FieldErrors::new()
        }
    }

    /// Returns `true` when the user was registered.
    pub async fn submit(&mut self) -> bool {
        self.submitted = true;
        self.notice.clear();
        if !form_errors(&self.form).is_empty() {
            return false;
        }
        let user = match self.form.clone().into_user() {
            Ok(user) => user,
            Err(err) => {
                self.notice.say(invalid_message(err));
                return false;
            }
        };
        let result = self.gateway.register_user(&user).await;
        let created = self.notice.succeeded(result);
        if created {
            self.notice
                .say(format!("Пользователь '{}' создан", user.login));
        }
        created
    }

    pub fn reset(&mut self) {
        self.form = NewUser::default();
        self.submitted = false;
    }

    pub fn back(&self) -> Route {
        Route::Users
    }
}
