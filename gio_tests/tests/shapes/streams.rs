use anyhow::Result;
use gio_core::transport::ByteTransport;
use gio_core::{parse_token, GenericIO, StreamControl, TokenRead};
use std::io::{BufReader, Cursor};

pub fn tokens<T: ByteTransport>(gio: &mut GenericIO<T>) -> Result<()> {
    let mut src = BufReader::new("the quick\n\tbrown fox\n\njumps".as_bytes());
    assert_eq!(5, gio.write_tokens(&mut src, Some(" "))?);

    let mut head = String::new();
    let opts = TokenRead::default().until("brown");
    assert_eq!(3, gio.read_tokens(&mut head, opts)?);
    assert_eq!("the quick brown", head);

    let mut tail = String::new();
    let opts = TokenRead::default().separated_by("/");
    assert_eq!(2, gio.read_tokens_with(&mut tail, opts, |t| t.to_uppercase())?);
    assert_eq!("FOX/JUMPS", tail);

    Ok(())
}

pub fn parsed_tokens<T: ByteTransport>(gio: &mut GenericIO<T>) -> Result<()> {
    let mut src = Cursor::new(String::from("3 -1 4 -1 5"));
    assert_eq!(5, gio.write_tokens_with(&mut src, parse_token::<i16>)?);

    let mut text = String::new();
    let r_ct = gio.read_elements_to_text::<i16, _>(&mut text, ",", None, None)?;
    assert_eq!(5, r_ct);
    assert_eq!("3,-1,4,-1,5", text);

    Ok(())
}

pub fn end_line<T: ByteTransport>(gio: &mut GenericIO<T>) -> Result<()> {
    gio.write_str("line one")?;
    assert_eq!(1, gio.write_control(StreamControl::EndLine)?);
    gio.write_str("line two")?;
    assert_eq!(0, gio.write_control(StreamControl::Flush)?);

    let mut s = String::new();
    gio.read_str_until(&mut s, "\n", None)?;
    assert_eq!("line one\n", s);

    let mut sink = String::new();
    assert_eq!(2, gio.read_tokens(&mut sink, TokenRead::default())?);
    assert_eq!("line two", sink);

    Ok(())
}
