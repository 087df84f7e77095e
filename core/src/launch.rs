/// Fixed mapping from catalog entry name to launch target. Entries may be
/// added to the catalog before a launch target exists; lookups for them
/// return `None` and the frontend treats that as a logged no-op.
pub const LAUNCH_TARGETS: &[(&str, &str)] = &[
    ("XRDlicious", "https://rdf-xrd-calculator.streamlit.app/"),
    ("ICET & ATAT SQS", "https://atat-sqs.streamlit.app/"),
    ("MACE GUI", "https://github.com/bracerino/mace-md-gui"),
    ("VASP Helper", "https://github.com/bracerino/convergence-vasp-gui"),
    (
        "Point Defects Generator",
        "https://xrdlicious-point-defects.streamlit.app/",
    ),
    ("Quiz Dung Game", "https://math-dung.streamlit.app/"),
];

pub fn launch_url(name: &str) -> Option<&'static str> {
    let trimmed = name.trim();
    LAUNCH_TARGETS
        .iter()
        .find(|(target, _)| *target == trimmed)
        .map(|(_, url)| *url)
}
