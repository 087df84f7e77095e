use yew::events::MouseEvent;
use yew::prelude::*;

use crate::icons::{ui_icon, UiIcon};

#[derive(Properties, PartialEq)]
pub(crate) struct BioPanelProps {
    pub(crate) on_close: Callback<MouseEvent>,
}

/// Full-screen biography/CV overlay. Static content; the only behavior is
/// the close control.
#[function_component(BioPanel)]
pub(crate) fn bio_panel(props: &BioPanelProps) -> Html {
    html! {
        <div class="bio-overlay">
            <div class="bio-panel">
                <div class="bio-panel__header">
                    <h2>{ "Current Information and CV" }</h2>
                    <button class="bio-panel__close" onclick={props.on_close.clone()} aria-label="Close panel">
                        { ui_icon(UiIcon::Close) }
                    </button>
                </div>

                <div class="bio-panel__body">
                    <section class="bio-section">
                        <h3>{ "Current Status" }</h3>
                        <div class="bio-card">
                            { bullet("tile--blue-purple", "PhD Studies",
                                "Finishing the PhD (writing thesis) in Quantum Technologies") }
                            { bullet("tile--green-teal", "Current Work",
                                "Working at Faculty of Mechanical Engineering, CTU in Prague") }
                            { bullet("tile--purple-pink", "Research Position",
                                "Institute of Physics of the Czech Academy of Sciences") }
                        </div>
                    </section>

                    <section class="bio-section">
                        <h3>{ "Education" }</h3>
                        <div class="bio-card">
                            { bullet("tile--blue-purple", "PhD in Quantum Technologies (2020 – Present)",
                                "Faculty of Nuclear Sciences and Physical Engineering, Czech Technical University in Prague") }
                            { bullet("tile--green-teal", "Master's Degree in Solid State Engineering (2018 – 2020)",
                                "Faculty of Nuclear Sciences and Physical Engineering, Czech Technical University in Prague | Graduated with honors") }
                            { bullet("tile--purple-pink", "Bachelor's Degree in Solid State Engineering (2014 – 2018)",
                                "Faculty of Nuclear Sciences and Physical Engineering, Czech Technical University in Prague | Graduated with honors") }
                        </div>
                    </section>

                    <section class="bio-section">
                        <h3>{ "Work Experience" }</h3>
                        <div class="bio-card">
                            { bullet_with_note("tile--blue-purple", "PhD Student & Researcher (2019 – Present)",
                                "Department of Material Analysis, Institute of Physics, Czech Academy of Sciences",
                                "X-ray diffraction analysis, SAXS measurement and analysis, orientation of single-crystals") }
                            { bullet_with_note("tile--green-teal", "Researcher (2020 – Present)",
                                "Department of Physics, Faculty of Mechanical Engineering, Czech Technical University in Prague",
                                "Ion implantation and predictions of its effects on materials surface properties using computer simulations") }
                        </div>
                    </section>

                    <section class="bio-section">
                        <h3>{ "Research Focus" }</h3>
                        <div class="bio-card">
                            <p>
                                { "Fundamental research of ion implantation and its application on surface \
                                   modifications of titanium with nitrogen beam using a combined experimental \
                                   and computational approach. The work involves advanced computational \
                                   materials science, including DFT calculations, molecular dynamics \
                                   simulations, and machine learning applications in materials research." }
                            </p>
                        </div>
                    </section>

                    <section class="bio-section">
                        <h3>{ "Technical Skills" }</h3>
                        <div class="bio-grid">
                            { skill_card("Programming", "Python, Bash scripting, Linux (Ubuntu)") }
                            { skill_card("Computational Methods", "DFT, MD simulations, Machine Learning") }
                            { skill_card("Software",
                                "VASP, CP2K, LAMMPS, HPC Computing (Slurm), Materials Studio, TRIM, TRIDYN, SDTrimSP") }
                        </div>
                    </section>

                    <section class="bio-section">
                        <h3>{ "Research Achievements" }</h3>
                        <div class="bio-card">
                            <ul>
                                <li>{ "10 published articles and conference papers" }</li>
                                <li>{ "Participated in 10 international conferences" }</li>
                                <li>{ "Contributed to 3 grant proposals" }</li>
                                <li>{ "Work on 2 student grants" }</li>
                                <li>{ "Teaching bachelor courses (Seminar of Computer Simulations, Basics of Solid State Physics)" }</li>
                                <li>{ "All State Exams (Bachelor, Masters, PhD) absolved with honors" }</li>
                            </ul>
                        </div>
                    </section>

                    <section class="bio-section">
                        <h3>{ "Completed PhD Courses" }</h3>
                        <div class="bio-grid">
                            { skill_card("Core Courses",
                                "Numerical Methods for Quantum Technologies, Advanced Topics in Quantum Theory of Solid State") }
                            { skill_card("Computational Courses",
                                "Atomistic Computer Simulations of Quantum Structures, Computational Physics") }
                            { skill_card("Machine Learning", "Machine Learning and Optimization in Physics") }
                        </div>
                    </section>

                    <section class="bio-section">
                        <h3>{ "Experimental Skills" }</h3>
                        <div class="bio-card">
                            { skill_row("Ion Implantation", "Experienced in ion implantation techniques and analysis") }
                            { skill_row("X-ray Diffraction", "Single crystal orientations, phase analysis, stress analysis") }
                            { skill_row("SAXS Analysis", "Small-angle X-ray scattering measurements and analysis") }
                        </div>
                    </section>

                    <section class="bio-section">
                        <h3>{ "Academic Activities" }</h3>
                        <div class="bio-card">
                            <ul>
                                <li>{ "Teaching assistant for bachelor courses" }</li>
                                <li>{ "Supervision of student projects" }</li>
                                <li>{ "Participation in international conferences" }</li>
                                <li>{ "Collaboration on grant proposals" }</li>
                                <li>{ "Peer review activities" }</li>
                            </ul>
                        </div>
                    </section>

                    <section class="bio-section">
                        <h3>{ "Languages" }</h3>
                        <div class="bio-card">
                            <p>
                                <strong>{ "Czech:" }</strong>{ " Native | " }
                                <strong>{ "English:" }</strong>{ " Fluent | " }
                                <strong>{ "Spanish:" }</strong>{ " Beginner" }
                            </p>
                        </div>
                    </section>
                </div>
            </div>
        </div>
    }
}

fn bullet(dot_class: &'static str, heading: &'static str, body: &'static str) -> Html {
    html! {
        <div class="bio-bullet">
            <span class={classes!("bio-bullet__dot", dot_class)} />
            <div>
                <h4>{ heading }</h4>
                <p>{ body }</p>
            </div>
        </div>
    }
}

fn bullet_with_note(
    dot_class: &'static str,
    heading: &'static str,
    body: &'static str,
    note: &'static str,
) -> Html {
    html! {
        <div class="bio-bullet">
            <span class={classes!("bio-bullet__dot", dot_class)} />
            <div>
                <h4>{ heading }</h4>
                <p>{ body }</p>
                <p class="bio-bullet__note">{ note }</p>
            </div>
        </div>
    }
}

fn skill_card(heading: &'static str, body: &'static str) -> Html {
    html! {
        <div class="bio-card bio-card--compact">
            <h4>{ heading }</h4>
            <p>{ body }</p>
        </div>
    }
}

fn skill_row(heading: &'static str, body: &'static str) -> Html {
    html! {
        <div class="bio-row">
            <h4>{ heading }</h4>
            <p>{ body }</p>
        </div>
    }
}
