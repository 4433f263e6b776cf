use split_screen::{SplitScreen, TermSize, TerminalSink};

fn screen_rows(screen: SplitScreen<TermSize, TerminalSink<Vec<u8>>>, size: TermSize) -> String {
    let mut parser = vt100::Parser::new(size.height, size.width, 0);
    parser.process(&screen.into_sink().into_inner());
    parser
        .screen()
        .rows(0, size.width)
        .enumerate()
        .map(|(row, text)| format!("{row:02}|{text}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn renders_both_panels_on_a_real_screen() {
    let size = TermSize::new(32, 9);
    let mut screen = SplitScreen::new(size, TerminalSink::new(Vec::<u8>::new()));
    screen.log("resolving dependencies");
    screen.progress("Fetch", 100.0);
    screen.progress("Compile", 25.0);
    screen.warn("unused import");
    screen.progress("Link", 50.0);
    screen.error("linker failed");
    screen.success("retrying");

    insta::assert_snapshot!(screen_rows(screen, size), @r###"
    00|resolving dependencies
    01|unused import
    02|linker failed
    03|retrying
    04|--------------------------------
    05|Compile [████             ] 25%
    06|Link [██████████          ] 50%
    07|
    08|
    "###);
}

#[test]
fn colors_reach_the_terminal() {
    let size = TermSize::new(20, 4);
    let mut screen = SplitScreen::new(size, TerminalSink::new(Vec::<u8>::new()));
    screen.error("bad");
    screen.success("good");

    let mut parser = vt100::Parser::new(size.height, size.width, 0);
    parser.process(&screen.into_sink().into_inner());
    let cell = |row, col| parser.screen().cell(row, col).unwrap().fgcolor();
    assert_ne!(cell(0, 0), vt100::Color::Default);
    assert_ne!(cell(0, 0), cell(1, 0));
    assert_eq!(cell(0, 3), vt100::Color::Default);
}

#[test]
fn later_frames_replace_earlier_ones() {
    let size = TermSize::new(24, 4);
    let mut screen = SplitScreen::new(size, TerminalSink::new(Vec::<u8>::new()));
    screen.progress("Build", 10.0);
    screen.progress("Build", 90.0);
    screen.progress("Test", 0.0);

    let rows = screen_rows(screen, size);
    assert!(rows.contains("02|Build [█████████  ] 90%"));
    assert!(rows.contains("03|Test [            ] 0%"));
    assert!(!rows.contains("10%"));
}

#[test]
fn wide_text_is_clipped_by_columns() {
    let size = TermSize::new(10, 4);
    let mut screen = SplitScreen::new(size, TerminalSink::new(Vec::<u8>::new()));
    screen.log("日本語のログメッセージ");
    screen.log("second");
    screen.progress("ビルド", 0.0);

    let rows = screen_rows(screen, size);
    assert!(rows.starts_with("00|日本語のロ\n01|second\n02|ビルド []"), "{rows}");
}

#[test]
fn control_characters_do_not_move_the_cursor() {
    let size = TermSize::new(20, 4);
    let mut screen = SplitScreen::new(size, TerminalSink::new(Vec::<u8>::new()));
    screen.log("a\nLEFTOVER-TEXT");
    screen.log("x");
    screen.progress("tab\tbed", 50.0);

    insta::assert_snapshot!(screen_rows(screen, size), @r###"
    00|a LEFTOVER-TEXT
    01|x
    02|tab bed [██   ] 50%
    03|
    "###);
}
