use classdoc_core::extract;

fn main() {
    let source = r#"
/**
 * @class Ui.Counter
 * @extends Ui.Widget
 * A counter with a display. See {@link #increment}.
 * @example
 * var c = new Ui.Counter();
 * c.increment();
 */

/** @prop {Number} value [0] the current count */

/**
 * @function increment
 * Bumps the counter.
 * @param {Number} by how much to add
 */
"#;

    match extract(source, "counter.js") {
        Some(extraction) => {
            for diagnostic in &extraction.diagnostics {
                eprintln!("{diagnostic}");
            }
            let json_output = extraction.to_json().unwrap();
            println!("Extracted class record:\n{json_output}");
        }
        None => {
            println!("No @class documentation found in counter.js");
        }
    }
}
