use courier_core::AppViewModel;

/// Renders the form snapshot, the status line, and the prompt. The prompt
/// reflects whether a submission can be sent right now.
pub fn render(view: &AppViewModel) -> String {
    let file = view.file_path.as_deref().unwrap_or("(none)");
    let marker = if view.submit_enabled {
        "ready"
    } else {
        "submitting"
    };
    format!(
        "\n  title : {title}\n  author: {author}\n  file  : {file}\n  status: {status}\n[{marker}] > ",
        title = view.title,
        author = view.author,
        file = file,
        status = view.status,
        marker = marker,
    )
}

pub fn welcome(view: &AppViewModel) -> String {
    format!("Courier submission form\n{}{}", help(), render(view))
}

pub fn help() -> String {
    [
        "Commands:",
        "  title <text>    set the submission title",
        "  author <text>   set the author",
        "  file <path>     choose the file to upload",
        "  submit          send the submission",
        "  help            show this list",
        "  quit            exit",
        "",
    ]
    .join("\n")
}

pub fn unknown_hint(word: &str) -> String {
    format!("Unknown command {word:?}; type help for the command list.\n")
}

#[cfg(test)]
mod tests {
    use super::{help, render, unknown_hint, welcome};
    use courier_core::AppViewModel;

    fn sample_view() -> AppViewModel {
        AppViewModel {
            title: "Quay wall survey".to_string(),
            author: "H. Seo".to_string(),
            file_path: Some("survey.hwp".to_string()),
            submit_enabled: true,
            status: "OK".to_string(),
            dirty: false,
        }
    }

    #[test]
    fn render_shows_every_field_and_the_status() {
        let out = render(&sample_view());
        assert!(out.contains("title : Quay wall survey"));
        assert!(out.contains("author: H. Seo"));
        assert!(out.contains("file  : survey.hwp"));
        assert!(out.contains("status: OK"));
        assert!(out.ends_with("[ready] > "));
    }

    #[test]
    fn a_missing_file_renders_as_none() {
        let view = AppViewModel {
            file_path: None,
            ..sample_view()
        };
        assert!(render(&view).contains("file  : (none)"));
    }

    #[test]
    fn an_in_flight_submission_shows_in_the_prompt() {
        let view = AppViewModel {
            submit_enabled: false,
            ..sample_view()
        };
        assert!(render(&view).ends_with("[submitting] > "));
    }

    #[test]
    fn help_names_every_command_the_parser_accepts() {
        let text = help();
        for command in ["title", "author", "file", "submit", "help", "quit"] {
            assert!(text.contains(command), "help is missing {command}");
        }
    }

    #[test]
    fn welcome_leads_with_the_help_text() {
        let out = welcome(&sample_view());
        assert!(out.starts_with("Courier submission form\nCommands:"));
        assert!(out.ends_with("[ready] > "));
    }

    #[test]
    fn unknown_hint_names_the_rejected_word() {
        assert_eq!(
            unknown_hint("upload"),
            "Unknown command \"upload\"; type help for the command list.\n"
        );
    }
}
