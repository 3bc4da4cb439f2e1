use maud::{DOCTYPE, Markup, html};

use crate::{
    entities::movie,
    models::{self, RateFormErrors},
    tmdb::MovieSummary,
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub fn index_page(movies: &[movie::Model]) -> String {
    page(
        "My Top Movies",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-4xl mx-auto px-6 py-12" {
                    div class="flex items-start justify-between gap-6" {
                        div {
                            h1 class="text-3xl font-bold text-gray-900" { "My Top Movies" }
                            p class="mt-2 text-gray-600" { "Ranked by your ratings." }
                        }
                        a class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" href="/add" { "Add movie" }
                    }

                    @if movies.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "No movies yet. Add one to get started." }
                        }
                    } @else {
                        div class="mt-10 space-y-4" {
                            @for movie in movies {
                                (movie_card(movie))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn add_page(title_value: &str, error: Option<&str>) -> String {
    page(
        "Add movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { "Add movie" }
                        p class="mt-2 text-gray-600" { "Search the catalog by title, then pick the right match." }

                        form class="mt-8 space-y-6" method="post" action="/add" {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="title" { "Movie name" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="title" id="title" value=(title_value);
                                @if let Some(error) = error {
                                    p class="mt-2 text-sm text-red-600" { (error) }
                                }
                            }

                            button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Add movie" }
                        }

                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back to list" }
                    }
                }
            }
        },
    )
}

pub fn select_page(query: &str, candidates: &[MovieSummary], image_base: &str) -> String {
    page(
        "Select movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    h1 class="text-3xl font-bold text-gray-900" { "Select movie" }
                    p class="mt-2 text-gray-600" { "Catalog matches for \"" (query) "\"." }

                    @if candidates.is_empty() {
                        div class="mt-8 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "No matches found. Try another title." }
                            a class="mt-4 inline-block text-blue-600 hover:text-blue-800" href="/add" { "Search again" }
                        }
                    } @else {
                        div class="mt-8 space-y-3" {
                            @for candidate in candidates {
                                a class="flex gap-4 bg-white shadow rounded-lg p-5 hover:bg-blue-50" href=(format!("/find/{}", candidate.id)) {
                                    @let poster = models::image_url(image_base, candidate.poster_path.as_deref());
                                    @if !poster.is_empty() {
                                        img class="w-16 rounded shadow" src=(poster) alt=(candidate.title);
                                    }
                                    div {
                                        h2 class="font-semibold text-gray-900" {
                                            (candidate.title)
                                            @if let Some(year) = models::release_year(candidate.release_date.as_deref().unwrap_or("")) {
                                                span class="ml-2 font-normal text-gray-500" { "(" (year) ")" }
                                            }
                                        }
                                        @if !candidate.overview.is_empty() {
                                            p class="mt-1 text-sm text-gray-600" { (candidate.overview) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn edit_page(
    movie: &movie::Model,
    rating_value: &str,
    review_value: &str,
    errors: &RateFormErrors,
    flash: Option<&str>,
) -> String {
    page(
        "Rate movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    @if let Some(flash) = flash {
                        div class="mb-6 rounded-md border border-amber-300 bg-amber-50 px-4 py-3 text-sm text-amber-800" { (flash) }
                    }

                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { (movie.title) }
                        p class="mt-2 text-gray-600" { "(" (movie.year) ")" }

                        form class="mt-8 space-y-6" method="post" action=(format!("/edit/{}", movie.id)) {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="rating" { "Your rating out of 10 e.g. 7.5" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="rating" id="rating" value=(rating_value);
                                @if let Some(error) = errors.rating {
                                    p class="mt-2 text-sm text-red-600" { (error) }
                                }
                            }

                            div {
                                label class="block text-sm font-medium text-gray-700" for="review" { "Your review" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="review" id="review" value=(review_value);
                                @if let Some(error) = errors.review {
                                    p class="mt-2 text-sm text-red-600" { (error) }
                                }
                            }

                            button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Done" }
                        }

                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back to list" }
                    }
                }
            }
        },
    )
}

pub fn error_page(title: &str, message: String) -> String {
    page(
        title,
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { (title) }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

fn movie_card(movie: &movie::Model) -> Markup {
    html! {
        div class="bg-white shadow rounded-lg p-6" {
            div class="flex items-start gap-6" {
                @if !movie.img_url.is_empty() {
                    img class="w-24 rounded-md shadow" src=(movie.img_url) alt=(movie.title);
                }
                div class="flex-1" {
                    h2 class="text-xl font-semibold text-gray-900" {
                        @if let Some(rank) = movie.ranking {
                            span class="mr-2 text-gray-400" { "#" (rank) }
                        }
                        (movie.title)
                        span class="ml-2 font-normal text-gray-500" { "(" (movie.year) ")" }
                    }
                    @if let Some(rating) = movie.rating {
                        p class="mt-1 text-sm font-medium text-amber-600" { (rating) " / 10" }
                    } @else {
                        p class="mt-1 text-sm text-gray-500" { "Not rated yet" }
                    }
                    p class="mt-2 text-sm text-gray-600" { (movie.description) }
                    @if let Some(review) = &movie.review {
                        p class="mt-2 text-sm italic text-gray-700" { "\u{201c}" (review) "\u{201d}" }
                    }
                    div class="mt-4 flex items-center gap-4" {
                        a class="text-sm text-blue-600 hover:text-blue-800" href=(format!("/edit/{}", movie.id)) { "Edit rating" }
                        form method="post" action=(format!("/delete/{}", movie.id)) {
                            button class="text-sm text-red-600 hover:text-red-800" type="submit" { "Delete" }
                        }
                    }
                }
            }
        }
    }
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}
