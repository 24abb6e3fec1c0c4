use nom::character::complete::{char as one_char, line_ending, multispace0, none_of, space0};
use nom::combinator::{all_consuming, opt};
use nom::multi::{many1, separated_list0};
use nom::sequence::{delimited, pair, preceded, terminated};
use nom::{Finish, IResult};

use crate::error::{Error, Result};

fn cell(input: &str) -> IResult<&str, char> {
    terminated(
        none_of(" \t\r\n,"),
        pair(space0, opt(pair(one_char(','), space0))),
    )(input)
}

fn row(input: &str) -> IResult<&str, Vec<char>> {
    preceded(space0, many1(cell))(input)
}

fn row_break(input: &str) -> IResult<&str, ()> {
    let (rest, _) = many1(preceded(space0, line_ending))(input)?;
    Ok((rest, ()))
}

fn grid(input: &str) -> IResult<&str, Vec<Vec<char>>> {
    delimited(multispace0, separated_list0(row_break, row), multispace0)(input)
}

/// Splits grid text into rows of cells. Rectangularity is checked by the caller.
pub(crate) fn grid_rows(text: &str) -> Result<Vec<Vec<char>>> {
    all_consuming(grid)(text)
        .finish()
        .map(|(_, rows)| rows)
        .map_err(|e| {
            let consumed = &text[..text.len() - e.input.len()];
            Error::GridParse {
                line: consumed.matches('\n').count() + 1,
                snippet: e.input.lines().next().unwrap_or_default().chars().take(20).collect(),
            }
        })
}
