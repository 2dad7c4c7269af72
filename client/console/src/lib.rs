// Logging macros. On wasm32 they forward to the browser console, elsewhere to stderr.

#[macro_export]
macro_rules! debug {
    ($($args:expr),*) => {{
        let mut to_debug = String::from("");
        $(to_debug = format!("{} {}", to_debug, $args);)*
        $crate::debug(to_debug.trim_start());
    }}
}

#[macro_export]
macro_rules! err {
    ($($args:expr),*) => {{
        let mut to_err = String::from("");
        $(to_err = format!("{} {}", to_err, $args);)*
        $crate::err(to_err.trim_start());
    }}
}

#[macro_export]
macro_rules! log {
    ($($args:expr),*) => {{
        let mut to_log = String::from("");
        $(to_log = format!("{} {}", to_log, $args);)*
        $crate::log(to_log.trim_start());
    }}
}

#[macro_export]
macro_rules! warning {
    ($($args:expr),*) => {{
        let mut to_warning = String::from("");
        $(to_warning = format!("{} {}", to_warning, $args);)*
        $crate::warning(to_warning.trim_start());
    }}
}

cfg_if::cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        use wasm_bindgen::prelude::*;

        #[wasm_bindgen]
        extern "C" {
            #[wasm_bindgen(js_namespace = console)]
            pub fn debug(s: &str);

            #[wasm_bindgen(js_namespace = console, js_name = error)]
            pub fn err(s: &str);

            #[wasm_bindgen(js_namespace = console)]
            pub fn log(s: &str);

            #[wasm_bindgen(js_namespace = console, js_name = warn)]
            pub fn warning(s: &str);
        }
    } else {
        pub fn debug(s: &str) {
            eprintln!("[debug] {}", s);
        }

        pub fn err(s: &str) {
            eprintln!("[error] {}", s);
        }

        pub fn log(s: &str) {
            eprintln!("[log] {}", s);
        }

        pub fn warning(s: &str) {
            eprintln!("[warn] {}", s);
        }
    }
}
