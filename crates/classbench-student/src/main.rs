use classbench_student::StudentRecord;
use console::style;

fn main() {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let students = [
        StudentRecord::new("John", 1, vec![80, 90, 70]),
        StudentRecord::new("Jane", 2, vec![]),
    ];

    for student in &students {
        log::debug!("{student}");
        let line = student.summary();
        if student.is_passing() {
            println!("{}", style(line).green());
        } else {
            println!("{}", style(line).red());
        }
    }
}
