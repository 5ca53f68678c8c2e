use anyhow::Result;
use gio_core::transport::ByteTransport;
use gio_core::GenericIO;

pub fn until_terminator<T: ByteTransport>(gio: &mut GenericIO<T>) -> Result<()> {
    assert_eq!(7, gio.write_str("string!")?);

    let mut s = String::new();
    assert_eq!(3, gio.read_str_until(&mut s, "r", Some(64))?);
    assert_eq!("str", s);

    let mut rest = String::new();
    assert_eq!(4, gio.read_string(&mut rest, Some(4))?);
    assert_eq!("ing!", rest);

    Ok(())
}

pub fn nul_terminated<T: ByteTransport>(gio: &mut GenericIO<T>) -> Result<()> {
    let words = ["alpha", "", "ünïcödé"];
    for word in words {
        gio.write_str_nul(word)?;
    }

    for word in words {
        let mut s = String::new();
        let r_len = gio.read_str_until(&mut s, "\0", None)?;
        assert_eq!(word.len() + 1, r_len);
        assert_eq!(Some(word), s.strip_suffix('\0'));
    }

    Ok(())
}

pub fn long_lines<T: ByteTransport>(gio: &mut GenericIO<T>) -> Result<()> {
    for pad_len in 4093..=4097 {
        let line = format!("{}\r\n", "-".repeat(pad_len));
        gio.write_str(&line)?;
        gio.write_str("next")?;

        let mut s = String::new();
        assert_eq!(line.len(), gio.read_str_until(&mut s, "\r\n", None)?);
        assert_eq!(line, s);

        let mut rest = String::new();
        assert_eq!(4, gio.read_string(&mut rest, Some(4))?);
        assert_eq!("next", rest);
    }

    Ok(())
}
