use uavfleet_core::types::DbId;

/// Tabs of the vehicle card, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTab {
    Info,
    Slg,
    EvalAct,
    Insurance,
    Photos,
    Maintenance,
    Failures,
    Engine,
}

impl CardTab {
    pub const ALL: &'static [CardTab] = &[
        CardTab::Info,
        CardTab::Slg,
        CardTab::EvalAct,
        CardTab::Insurance,
        CardTab::Photos,
        CardTab::Maintenance,
        CardTab::Failures,
        CardTab::Engine,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Информация",
            Self::Slg => "СЛГ",
            Self::EvalAct => "Акт оценки",
            Self::Insurance => "Страхование",
            Self::Photos => "Фото",
            Self::Maintenance => "ТО",
            Self::Failures => "Отказы",
            Self::Engine => "Двигатель",
        }
    }
}

/// Navigation targets of the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Login page; `msg` carries e.g. `"Token expired"`.
    Landing { msg: Option<String> },
    Vehicles,
    AddVehicle,
    Users,
    AddUser,
    UserCard { login: String },
    Activity,
    VehicleCard { uav_id: String, tab: CardTab },
    FailureHistory { uav_id: String, failure_id: DbId },
}
