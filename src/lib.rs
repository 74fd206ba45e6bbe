pub mod core {
    pub mod command;
    pub mod domain;
    pub mod events;
    pub mod library;
    pub mod repository;
}

pub mod utils {
    pub mod date;
    pub mod logging;
    pub mod memory;
}

pub mod books {
    pub mod domain;
    pub mod dto;
    pub(crate) mod factory;
    pub(crate) mod repository;
}

pub mod catalog {
    pub mod command;
    pub mod domain;
    pub mod factory;
}

pub mod checkout;
pub mod demo;
pub mod gateway;
pub mod patrons;
pub mod sections;
