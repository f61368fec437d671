mod it_should {

    use std::fs::{self, File};
    use std::io::{Seek, SeekFrom};
    use std::thread;

    use printkit::{BufferPrinter, Contents, Error, Printer, StreamPrinter, StreamPrinterFlags};
    use tempfile::tempdir;

    #[test]
    fn write_the_same_text_through_both_printers() {
        let mut output = Vec::new();

        let mut buffer_printer = BufferPrinter::new(None);
        let mut stream_printer =
            StreamPrinter::new(Some(&mut output), StreamPrinterFlags::empty(), 0);

        let printers: [&mut dyn Printer; 2] = [&mut buffer_printer, &mut stream_printer];

        for printer in printers {
            printer.write(b"spam").unwrap();
            printer.write_byte(b' ').unwrap();
            printer.write_rune('\u{1F600}').unwrap();
            printer.println(&[&"", &1, &"eggs"]).unwrap();

            assert_eq!(printer.len(), 17);
        }

        drop(stream_printer);

        assert_eq!(buffer_printer.bytes().unwrap(), output.as_slice());
        assert_eq!(buffer_printer.string().unwrap(), "spam \u{1F600} 1 eggs\n");
    }

    #[test]
    fn write_to_a_file() {
        let temp_dir = tempdir().unwrap();

        let path = temp_dir.path().join("output.txt");

        let file = File::create(&path).unwrap();

        let mut printer = StreamPrinter::new(Some(file), StreamPrinterFlags::empty(), 0);

        printer.printf(format_args!("{}:{}", "spam", 4)).unwrap();
        printer.write_rune('\n').unwrap();

        assert_eq!(printer.len(), 7);

        drop(printer);

        let output_content = fs::read_to_string(path).expect("Failed to read output file");

        assert_eq!(output_content, "spam:4\n");
    }

    #[test]
    fn resume_counting_for_an_output_with_existing_content() {
        let temp_dir = tempdir().unwrap();

        let path = temp_dir.path().join("output.txt");

        fs::write(&path, "spam").unwrap();

        let mut file = fs::OpenOptions::new().append(true).open(&path).unwrap();

        let existing = file.seek(SeekFrom::End(0)).unwrap();

        let mut printer = StreamPrinter::new(
            Some(file),
            StreamPrinterFlags::empty(),
            usize::try_from(existing).unwrap(),
        );

        printer.write_string("eggs").unwrap();

        assert_eq!(printer.len(), 8);

        drop(printer);

        assert_eq!(fs::read_to_string(path).unwrap(), "spameggs");
    }

    #[test]
    fn share_one_output_between_printers_on_several_threads() {
        let temp_dir = tempdir().unwrap();

        let path = temp_dir.path().join("shared.txt");

        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .unwrap();

        let counts: Vec<usize> = thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let file = &file;

                    scope.spawn(move || {
                        let mut printer = StreamPrinter::new(
                            Some(file),
                            StreamPrinterFlags::PRIVATE_BUFFER,
                            0,
                        );

                        for _ in 0..100 {
                            printer.write_byte(b'a').unwrap();
                            printer.write_rune('ñ').unwrap();
                        }

                        printer.len()
                    })
                })
                .collect();

            handles.into_iter().map(|handle| handle.join().unwrap()).collect()
        });

        assert_eq!(counts, vec![300; 4]);
        assert_eq!(fs::metadata(path).unwrap().len(), 1200);
    }

    #[test]
    fn fail_with_an_overflow_error_without_changing_the_length() {
        let mut printer: StreamPrinter =
            StreamPrinter::new(None, StreamPrinterFlags::empty(), usize::MAX - 3);

        printer.write_string("abc").unwrap();

        let err = printer.write_string("d").unwrap_err();

        assert!(matches!(err, Error::OverflowsInt(_)));
        assert!(err.to_string().contains("'written' of StreamPrinter"));
        assert_eq!(printer.len(), usize::MAX);
    }

    #[test]
    fn fail_every_operation_on_absent_printers() {
        let mut buffer_printer: Option<BufferPrinter> = None;
        let mut stream_printer: Option<StreamPrinter> = None;

        let err = buffer_printer.print(&[&1]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Target for method BufferPrinter print must not be nil, but was"
        );

        let err = stream_printer.write_rune('a').unwrap_err();
        assert_eq!(
            err.to_string(),
            "Target for method StreamPrinter write_rune must not be nil, but was"
        );

        let err = buffer_printer.string().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Target for method BufferPrinter string must not be nil, but was"
        );
    }
}
