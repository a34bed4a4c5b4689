#![allow(non_snake_case)]

//! `Print_*` functions exported to JavaScript. They take and return JSON
//! strings; the typed versions live in `wasm::structs`.

use serde_derive::{Deserialize, Serialize};

/// `{ status, data }` returned by every `Print_*` function.
///
/// `status` is 0 on success, 1 if the input JSON didn't parse and 2 if the
/// call itself failed. A print run that hit a missing section or a blocked
/// popup still has status 0: those end up in `data.warnings`.
#[derive(Serialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "lowercase")]
pub struct PrintApiReturn<T: serde::Serialize> {
    pub status: usize,
    pub data: StatusOrData<T>,
}

/// The output struct, or an error message when `status != 0`
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(untagged)]
pub enum StatusOrData<T: serde::Serialize> {
    Ok(T),
    Error(String),
}

/// Prints a section of the current page in a popup window
///
/// ```js,no_run,ignore
/// let input = JSON.stringify({ options: { printSectionId: "invoice", printDelay: 500 } });
/// let result = JSON.parse(Print_PrintSection(input));
/// // { status: 0, data: { warnings: [] } }
/// ```
#[cfg(all(feature = "web", target_family = "wasm"))]
#[cfg_attr(target_family = "wasm", wasm_bindgen::prelude::wasm_bindgen)]
pub fn Print_PrintSection(input: String) -> String {
    api_inner(&input, |input: crate::wasm::structs::PrintSectionInput| {
        let host = crate::web::WebHost::from_window()
            .ok_or_else(|| "no window / document available".to_string())?;
        let out = crate::wasm::structs::print_section(&host, input)?;
        crate::web::report_to_console(&out.warnings);
        Ok(out)
    })
}

/// Builds the print document HTML from already-serialized page pieces,
/// without opening a window
///
/// ```js,no_run,ignore
/// let input = JSON.stringify({ options: { printSectionId: "x" }, content: "<h1>Hi</h1>" });
/// let html = JSON.parse(Print_ComposeDocument(input)).data.html;
/// ```
#[cfg_attr(target_family = "wasm", wasm_bindgen::prelude::wasm_bindgen)]
pub fn Print_ComposeDocument(input: String) -> String {
    api_inner(&input, crate::wasm::structs::compose_document)
}

fn api_inner<'a, T, Q, F>(input: &'a str, f: F) -> String
where
    T: serde::Serialize,
    Q: serde::Deserialize<'a>,
    F: FnOnce(Q) -> Result<T, String>,
{
    serde_json::to_string(&match serde_json::from_str::<Q>(input) {
        Ok(input) => match (f)(input) {
            Ok(o) => PrintApiReturn {
                status: 0,
                data: StatusOrData::Ok(o),
            },
            Err(e) => PrintApiReturn {
                status: 2,
                data: StatusOrData::Error(e),
            },
        },
        Err(e) => PrintApiReturn {
            status: 1,
            data: StatusOrData::Error(format!("failed to deserialize input: {e}")),
        },
    })
    .unwrap_or_default()
}
