pub mod core {
    pub mod command;
    pub mod controller;
    pub mod domain;
    pub mod events;
    pub mod library;
    pub mod repository;
}

pub mod books {
    pub mod domain;
    pub mod dto;
    pub mod factory;
    pub mod repository;
}

pub mod catalog {
    pub mod command {
        pub mod add_book_cmd;
        pub mod borrow_book_cmd;
        pub mod list_books_cmd;
        pub mod return_book_cmd;
    }
    pub mod controller;
    pub mod domain;
    pub mod dto;
    pub mod factory;
}

pub mod utils {
    pub mod date;
    pub mod logs;
}

pub mod console;
pub mod gateway;
pub mod payments;
