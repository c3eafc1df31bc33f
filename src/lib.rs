// Crate entry point. Declares and exposes modules; no business logic here.

pub mod shared {
    pub mod config;
    pub mod infrastructure {
        pub mod event_store;
    }
}

pub mod modules {
    pub mod registration {
        pub mod core {
            pub mod errors;
            pub mod events;
            pub mod evolve;
            pub mod journal;
            pub mod policy;
            pub mod state;
        }
        pub mod use_cases {
            pub mod add_course {
                pub mod command;
                pub mod decide;
            }
            pub mod register_student {
                pub mod command;
                pub mod decide;
            }
            pub mod enroll_in_course {
                pub mod command;
                pub mod decide;
            }
            pub mod make_payment {
                pub mod command;
                pub mod decide;
            }
        }
        pub mod application {
            pub mod errors;
            pub mod registration_system;
            pub mod views;
        }
    }
}

pub mod shell;
