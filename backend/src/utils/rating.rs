use entity::cadets;
use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use uuid::Uuid;

/// Competition ranks ("1224") for totals already sorted in descending order.
pub fn competition_ranks(totals: &[i32]) -> Vec<i32> {
    let mut ranks = Vec::with_capacity(totals.len());

    for (index, total) in totals.iter().enumerate() {
        let rank = match index.checked_sub(1) {
            Some(prev) if totals[prev] == *total => ranks[prev],
            _ => index as i32 + 1,
        };
        ranks.push(rank);
    }

    ranks
}

/// Rewrites `cadets.rank` from the current totals. Only changed rows are written.
pub async fn recompute_ranks<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let standings: Vec<(Uuid, i32, i32)> = cadets::Entity::find()
        .select_only()
        .column(cadets::Column::Id)
        .column(cadets::Column::TotalScore)
        .column(cadets::Column::Rank)
        .order_by_desc(cadets::Column::TotalScore)
        .order_by_asc(cadets::Column::Name)
        .lock_exclusive()
        .into_tuple()
        .all(db)
        .await?;

    let totals: Vec<i32> = standings.iter().map(|(_, total, _)| *total).collect();
    let ranks = competition_ranks(&totals);

    let mut changed = 0;
    for ((id, _, old_rank), rank) in standings.into_iter().zip(ranks) {
        if old_rank == rank {
            continue;
        }

        cadets::Entity::update_many()
            .col_expr(cadets::Column::Rank, Expr::value(rank))
            .filter(cadets::Column::Id.eq(id))
            .exec(db)
            .await?;
        changed += 1;
    }

    debug!("recomputed ranks, {} changed", changed);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_totals_rank_in_order() {
        assert_eq!(competition_ranks(&[90, 80, 70]), vec![1, 2, 3]);
    }

    #[test]
    fn ties_share_a_rank_and_the_next_one_skips() {
        assert_eq!(competition_ranks(&[100, 80, 80, 80, 50, 50, 10]), vec![1, 2, 2, 2, 5, 5, 7]);
    }

    #[test]
    fn everybody_tied_is_first() {
        assert_eq!(competition_ranks(&[0, 0, 0]), vec![1, 1, 1]);
    }

    #[test]
    fn no_cadets_no_ranks() {
        assert!(competition_ranks(&[]).is_empty());
    }
}
