//! Server-rendered HTML for the editor page.
//!
//! The page is plain HTML forms: no scripts, one form per action. While
//! reference data is loading the page shows only `Loading...`; if either
//! fetch failed it shows only the error message.

use scene_editor_core::editor::Editor;
use scene_editor_core::reference::EditorStatus;
use scene_editor_core::scene::Scene;
use scene_editor_core::types::{Character, Location};

/// Render the complete editor page for `editor`.
pub fn render_page(editor: &Editor) -> String {
    let body = match editor.status() {
        EditorStatus::Loading => "<p>Loading...</p>".to_string(),
        EditorStatus::Failed { message } => format!("<p>Error: {}</p>", escape(&message)),
        EditorStatus::Ready => render_editor(editor),
    };

    document(&body)
}

/// Render the page shown when a form action is rejected.
pub fn render_action_error(message: &str) -> String {
    document(&format!(
        "<p class=\"error\">Could not apply change: {}</p>\n<p><a href=\"/\">Back to the editor</a></p>",
        escape(message)
    ))
}

fn document(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Scene Editor</title>\n</head>\n<body>\n<div class=\"App\">\n{body}\n</div>\n</body>\n</html>\n"
    )
}

fn render_editor(editor: &Editor) -> String {
    let mut out = String::from("<div>\n<h2>Scene Editor</h2>\n");
    out.push_str(
        "<form method=\"post\" action=\"/scenes\"><button type=\"submit\">Add Scene</button></form>\n",
    );
    for scene in editor.scenes().iter() {
        out.push_str(&render_scene(scene, editor.characters(), editor.locations()));
    }
    out.push_str("</div>");
    out
}

fn render_scene(scene: &Scene, characters: &[Character], locations: &[Location]) -> String {
    // Scene ids are collection-assigned decimal numbers, safe in a path.
    let action = format!("/scenes/{}", escape(&scene.id));
    let mut out = format!(
        "<div class=\"scene\" id=\"scene-{}\">\n<h3>Scene {}</h3>\n",
        escape(&scene.id),
        escape(&scene.id)
    );

    // -- Characters --
    out.push_str("<div>\n<h4>Characters</h4>\n<ul class=\"available\">\n");
    for character in characters {
        out.push_str(&format!(
            "<li>{name}<form method=\"post\" action=\"{action}/characters\">\
             <input type=\"hidden\" name=\"character_id\" value=\"{id}\">\
             <button type=\"submit\">Add</button></form></li>\n",
            name = escape(&character.name),
            id = escape(&character.id),
        ));
    }
    out.push_str("</ul>\n<ul class=\"attached\">\n");
    for character in &scene.characters {
        out.push_str(&format!(
            "<li>{name}<form method=\"post\" action=\"{action}/characters/remove\">\
             <input type=\"hidden\" name=\"character_id\" value=\"{id}\">\
             <button type=\"submit\">Remove</button></form></li>\n",
            name = escape(&character.name),
            id = escape(&character.id),
        ));
    }
    out.push_str("</ul>\n</div>\n");

    // -- Location --
    out.push_str(&format!(
        "<div>\n<h4>Location</h4>\n<form method=\"post\" action=\"{action}/location\">\n<select name=\"location_id\">\n"
    ));
    for location in locations {
        let selected = if location.id == scene.location.id {
            " selected"
        } else {
            ""
        };
        out.push_str(&format!(
            "<option value=\"{}\"{selected}>{}</option>\n",
            escape(&location.id),
            escape(&location.name),
        ));
    }
    out.push_str("</select>\n<button type=\"submit\">Set Location</button>\n</form>\n</div>\n");

    // -- Description --
    out.push_str(&format!(
        "<div>\n<h4>Description</h4>\n<form method=\"post\" action=\"{action}/description\">\
         <input type=\"text\" name=\"description\" value=\"{}\">\
         <button type=\"submit\">Save</button></form>\n</div>\n",
        escape(&scene.description),
    ));

    out.push_str(&format!(
        "<form method=\"post\" action=\"{action}/remove\"><button type=\"submit\">Remove Scene</button></form>\n</div>\n"
    ));
    out
}

/// Escape text for use in HTML element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
