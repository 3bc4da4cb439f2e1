use std::sync::Arc;

use axum::{
    extract::{Form, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, SignedCookieJar};

use crate::{
    AppState,
    entities::movie,
    error::{AppError, AppResult},
    models::{self, AddMovieForm, RateFormErrors, RateMovieForm},
    store::{InsertOutcome, ListOutcome},
    templates,
};

pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let movies = match state.store.list_by_rating().await? {
        ListOutcome::Records(movies) => state.store.assign_ranks(movies).await?,
        ListOutcome::Unavailable => {
            tracing::warn!("movie table missing, rendering empty list");
            Vec::new()
        }
    };

    Ok(Html(templates::index_page(&movies)))
}

pub async fn add_form() -> Html<String> {
    Html(templates::add_page("", None))
}

pub async fn add_search(
    State(state): State<AppState>,
    Form(form): Form<AddMovieForm>,
) -> AppResult<Html<String>> {
    let title = match form.validate() {
        Ok(title) => title,
        Err(error) => return Ok(Html(templates::add_page(&form.title, Some(error)))),
    };

    let candidates = state.tmdb.search_movies(&title).await?;
    tracing::debug!(title = %title, candidates = candidates.len(), "catalog search");
    Ok(Html(templates::select_page(&title, &candidates, &state.config.tmdb_image_base_url)))
}

pub async fn find(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(id): Path<i32>,
) -> AppResult<(SignedCookieJar, Redirect)> {
    let detail = state.tmdb.movie_detail(id).await?;

    let year = models::release_year(&detail.release_date).ok_or_else(|| {
        AppError::Metadata(format!("unusable release date {:?}", detail.release_date))
    })?;
    let title = detail.original_title.clone();

    let record = movie::Model {
        id,
        title: detail.original_title,
        year,
        description: detail.overview,
        rating: None,
        ranking: None,
        review: None,
        img_url: models::image_url(
            &state.config.tmdb_image_base_url,
            detail.poster_path.as_deref(),
        ),
    };

    // The user lands on the rating form either way
    let jar = match state.store.insert(record).await? {
        InsertOutcome::Inserted => jar,
        InsertOutcome::DuplicateIgnored => {
            tracing::warn!(id, title = %title, "movie already in the list, insert skipped");
            // Path must cover /edit, where the notice is shown
            let mut cookie = Cookie::new("flash", format!("{title} is already on your list."));
            cookie.set_path("/");
            jar.add(cookie)
        }
    };

    Ok((jar, Redirect::to(&format!("/edit/{id}"))))
}

pub async fn edit_form(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(id): Path<i32>,
) -> AppResult<(SignedCookieJar, Html<String>)> {
    let movie = state.store.get(id).await?.ok_or(AppError::NotFound)?;

    let flash = jar.get("flash").map(|cookie| cookie.value().to_string());
    let jar = if flash.is_some() {
        let mut removal = Cookie::from("flash");
        removal.set_path("/");
        jar.remove(removal)
    } else {
        jar
    };

    let rating = movie.rating.map(|r| r.to_string()).unwrap_or_default();
    let review = movie.review.clone().unwrap_or_default();
    let page =
        templates::edit_page(&movie, &rating, &review, &RateFormErrors::default(), flash.as_deref());

    Ok((jar, Html(page)))
}

pub async fn edit_submit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<RateMovieForm>,
) -> AppResult<Response> {
    let movie = state.store.get(id).await?.ok_or(AppError::NotFound)?;

    let (rating, review) = match form.validate() {
        Ok(parsed) => parsed,
        Err(errors) => {
            let page = templates::edit_page(&movie, &form.rating, &form.review, &errors, None);
            return Ok(Html(page).into_response());
        }
    };

    state.store.set_rating(movie, rating, review).await?;
    Ok(Redirect::to("/").into_response())
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Redirect> {
    if !state.store.delete(id).await? {
        return Err(AppError::NotFound);
    }
    Ok(Redirect::to("/"))
}
