pub mod application {
    pub mod chat {
        pub mod get_response;
    }
}

pub mod domain {
    pub mod logger;
    pub mod chat {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_response;
        }
    }
}
