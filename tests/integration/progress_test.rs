use consolekit::core::progress::{from_fn, from_iter, run_with_sink, ProgressDriver, ProgressOptions, Step};
use consolekit::ui::sink::{MemorySink, StreamSink};
use consolekit::ConsoleError;

#[test]
fn test_stream_output_for_full_run() {
    let mut sink = StreamSink::new(Vec::new());
    let result = run_with_sink(
        || from_iter(vec![0.5], || "ok"),
        &ProgressOptions::new().width(4).title("Work").filled_char("#"),
        &mut sink,
    )
    .unwrap();

    assert_eq!(result, "ok");
    let output = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(output, "Work\n##-- 50%\r#### 100%\n");
}

#[test]
fn test_final_render_ignores_last_reported_value() {
    let mut sink = MemorySink::new();
    run_with_sink(
        || from_iter(vec![0.1, 0.3], || ()),
        &ProgressOptions::new().width(10),
        &mut sink,
    )
    .unwrap();

    assert_eq!(sink.texts().last().copied(), Some("██████████ 100%"));
}

#[test]
fn test_driver_with_reporter_on_stream() {
    let mut sink = StreamSink::new(Vec::new());
    let driver = ProgressDriver::new(&ProgressOptions::new().width(2).empty_char("."), &mut sink).unwrap();
    let value = driver
        .run_with_reporter(|reporter| {
            reporter.report(0.5)?;
            Ok(7)
        })
        .unwrap();

    assert_eq!(value, 7);
    let output = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(output, "█. 50%\r██ 100%\n");
}

#[test]
fn test_every_rendered_bar_has_configured_width() {
    let mut sink = MemorySink::new();
    let mut i = 0u32;
    run_with_sink(
        || {
            from_fn(move || {
                i += 1;
                if i <= 100 {
                    Step::Yield(f64::from(i) / 100.0)
                } else {
                    Step::Complete(())
                }
            })
        },
        &ProgressOptions::new().width(13).step(0.05),
        &mut sink,
    )
    .unwrap();

    assert!(sink.len() > 2);
    for line in sink.texts() {
        let (bar, pct) = line.rsplit_once(' ').unwrap();
        assert_eq!(bar.chars().count(), 13, "line {:?}", line);
        assert!(pct.ends_with('%'));
    }
}

#[test]
fn test_invalid_options_are_rejected_before_output() {
    let cases = vec![
        ProgressOptions::new().width(0),
        ProgressOptions::new().width(-1),
        ProgressOptions::new().step(0.0),
        ProgressOptions::new().step(1.5),
        ProgressOptions::new().filled_char("ab"),
        ProgressOptions::new().empty_char(""),
    ];

    for options in cases {
        let mut sink = MemorySink::new();
        let result = run_with_sink(|| from_iter(Vec::<f64>::new(), || ()), &options, &mut sink);
        assert!(
            matches!(result, Err(ConsoleError::Configuration(_))),
            "{:?} should be rejected",
            options
        );
        assert!(sink.is_empty());
    }
}
