use anyhow::{Result, bail};
use std::io::{self, IsTerminal};
use zeroize::Zeroizing;

pub const SECRET_ENV: &str = "SALTPASS_SECRET";

pub fn read_secret() -> Result<Zeroizing<String>> {
    //  Environment Variable
    //  SALTPASS_SECRET="supersecret" saltpass generate
    if let Ok(pw) = std::env::var(SECRET_ENV) {
        return Ok(Zeroizing::new(pw));
    }

    //  stdin (Pipeline)
    //  printf "%s" "$PW" | saltpass verify --record user.json
    if !io::stdin().is_terminal() {
        let mut buf = Zeroizing::new(String::new());
        if io::stdin().read_line(&mut buf)? == 0 {
            bail!("No secret provided");
        }
        trim_newline(&mut buf);
        return Ok(buf);
    }

    //  Interactive (TTY)
    let pw = rpassword::prompt_password("Secret: ")?;
    Ok(Zeroizing::new(pw))
}

fn trim_newline(s: &mut String) {
    while s.ends_with('\n') || s.ends_with('\r') {
        s.pop();
    }
}
