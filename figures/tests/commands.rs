use figures::App;

fn run(script: &str) -> String {
    let mut app = App::new();
    let mut out = Vec::new();
    app.run(script.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn prints_in_insertion_order() {
    let out = run("ADD circle red 5 0 0 1.1.2020\n\
                   ADD rectangle blue 0 0 2 2 1.1.2019\n\
                   ADD triangle green 0 0 1 0 0 1 1.1.2021\n\
                   PRINT\n");
    assert_eq!(
        out,
        "Circle: Color=red, Center=(0, 0), Radius=5, Year=2020\n\
         Rectangle: Color=blue, Point1=(0, 0), Point2=(2, 2), Year=2019\n\
         Triangle: Color=green, Point1=(0, 0), Point2=(1, 0), Point3=(0, 1), Year=2021\n\
         \n"
    );
}

#[test]
fn removes_figures_newer_than_year() {
    let out = run("ADD circle red 5 0 0 1.1.2020\n\
                   ADD rectangle blue 0 0 2 2 1.1.2019\n\
                   REM > 2019\n\
                   PRINT\n");
    assert_eq!(
        out,
        "Rectangle: Color=blue, Point1=(0, 0), Point2=(2, 2), Year=2019\n\n"
    );
}

#[test]
fn rem_on_empty_catalogue_is_silent() {
    assert_eq!(run("REM = 2020\nPRINT\n"), "");
}

#[test]
fn strict_comparison_spares_equal_year() {
    let out = run("ADD triangle green 0 0 1 0 0 1 1.1.2021\n\
                   REM < 2021\n\
                   PRINT\n");
    assert_eq!(
        out,
        "Triangle: Color=green, Point1=(0, 0), Point2=(1, 0), Point3=(0, 1), Year=2021\n\n"
    );
}

#[test]
fn print_on_empty_catalogue_is_a_noop() {
    assert_eq!(run("PRINT\nPRINT\n"), "");
}

#[test]
fn unknown_shape_kind_skips_the_line() {
    let out = run("ADD hexagon pink 1 1 1 1.1.2020\n\
                   ADD circle red 5 0 0 1.1.2020\n\
                   PRINT\n");
    assert_eq!(out, "Circle: Color=red, Center=(0, 0), Radius=5, Year=2020\n\n");
}

#[test]
fn unknown_command_does_not_stop_the_stream() {
    let out = run("WIPE\n\
                   ADD circle red 5 0 0 1.1.2020\n\
                   PRINT\n");
    assert_eq!(out, "Circle: Color=red, Center=(0, 0), Radius=5, Year=2020\n\n");
}

#[test]
fn malformed_rem_condition_removes_nothing() {
    let out = run("ADD circle red 5 0 0 1.1.2020\n\
                   REM >= 2019\n\
                   REM\n\
                   PRINT\n");
    assert_eq!(out, "Circle: Color=red, Center=(0, 0), Radius=5, Year=2020\n\n");
}

#[test]
fn malformed_add_fields_skip_the_line() {
    let out = run("ADD circle red wide 0 0 1.1.2020\n\
                   ADD circle red 5 0 0 someday\n\
                   ADD rectangle blue 0 0 2 2\n\
                   PRINT\n");
    assert_eq!(out, "");
}

#[test]
fn catalogue_survives_a_full_drain() {
    let out = run("ADD circle red 1 0 0 1.1.2020\n\
                   ADD circle blue 2 0 0 1.1.2020\n\
                   REM = 2020\n\
                   PRINT\n\
                   ADD triangle green 0 0 1 0 0 1 1.1.2021\n\
                   PRINT\n");
    assert_eq!(
        out,
        "Triangle: Color=green, Point1=(0, 0), Point2=(1, 0), Point3=(0, 1), Year=2021\n\n"
    );
}

#[test]
fn removal_is_idempotent_across_commands() {
    let first = run("ADD circle red 1 0 0 1.1.2018\n\
                     ADD circle blue 2 0 0 1.1.2022\n\
                     REM > 2020\n\
                     PRINT\n");
    let twice = run("ADD circle red 1 0 0 1.1.2018\n\
                     ADD circle blue 2 0 0 1.1.2022\n\
                     REM > 2020\n\
                     REM > 2020\n\
                     PRINT\n");
    assert_eq!(first, twice);
}

#[test]
fn blank_lines_are_skipped() {
    let out = run("\n\
                   ADD circle red 5 0 0 1.1.2020\n\
                   \n\
                   PRINT\n");
    assert_eq!(out, "Circle: Color=red, Center=(0, 0), Radius=5, Year=2020\n\n");
}

#[test]
fn interleaved_adds_and_removals_keep_order() {
    let out = run("ADD circle a 1 0 0 1.1.2015\n\
                   ADD circle b 1 0 0 1.1.2016\n\
                   ADD circle c 1 0 0 1.1.2017\n\
                   REM = 2016\n\
                   ADD circle d 1 0 0 1.1.2018\n\
                   PRINT\n");
    assert_eq!(
        out,
        "Circle: Color=a, Center=(0, 0), Radius=1, Year=2015\n\
         Circle: Color=c, Center=(0, 0), Radius=1, Year=2017\n\
         Circle: Color=d, Center=(0, 0), Radius=1, Year=2018\n\
         \n"
    );
}
