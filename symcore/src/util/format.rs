use std::fmt::Display;

pub fn paren_expr<S>(s: S) -> String
where S: Display {
    let s = s.to_string();
    if s.contains(' ') { 
        format!("({s})")
    } else { 
        s
    }
}

// Renders `r₀x₀ + r₁x₁ + ...` where each pair is (monomial, coefficient).
pub fn lc<X, R, S>(mut terms: S) -> String
where 
    X: Display, 
    R: Display, 
    S: Iterator<Item = (X, R)>
{ 
    let mut res: Vec<String> = vec![];
    
    if let Some((x, r)) = terms.next() {
        let r = paren_expr(r);
        let x = x.to_string();

        let term = if r == "1" { 
            x
        } else if r == "-1" && x != "1" { 
            format!("-{x}")
        } else if x == "1" {
            r
        } else { 
            format!("{r}{x}")
        };

        res.push(term)
    } else { 
        return String::from("0")
    };

    for (x, r) in terms {
        let r = paren_expr(r);
        let x = x.to_string();

        let (op, r) = if let Some(r) = r.strip_prefix('-') { 
            ("-", r.to_owned()) 
        } else { 
            ("+", r.to_owned())
        };

        let term = if x == "1" { 
            r
        } else if r == "1" { 
            x
        } else { 
            format!("{r}{x}")
        };

        res.push(op.to_string());
        res.push(term);
    }

    res.join(" ")
}

// `x`, `x²`, or `1` for the zeroth power.
pub fn mono<S>(x: S, d: u32) -> String
where S: Display {
    match d { 
        0 => String::from("1"),
        1 => x.to_string(),
        _ => format!("{x}{}", superscript(d))
    }
}

pub fn superscript(d: u32) -> String { 
    digits(d).into_iter().map(|d| 
        match d { 
            1 => '\u{00B9}',
            2 => '\u{00B2}',
            3 => '\u{00B3}',
            _ => char::from_u32(('\u{2070}' as u32) + d).unwrap_or('?')
        }
    ).collect()
}

fn digits(mut d: u32) -> Vec<u32> { 
    let mut res = vec![d % 10];
    d /= 10;
    while d > 0 { 
        res.push(d % 10);
        d /= 10;
    }
    res.reverse();
    res
}
