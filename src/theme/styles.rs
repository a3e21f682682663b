//! Global CSS styles for the Empty Nest site.
//!
//! Class names match the fragments emitted by the catalog renderer and the
//! section components.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BLUSH (Accent) */
  --blush: #d4a4a4;
  --blush-deep: #b98282;
  --blush-soft: rgba(212, 164, 164, 0.18);

  /* CHARCOAL (Text) */
  --charcoal: #2f2b2a;
  --charcoal-soft: #5c5654;
  --charcoal-muted: rgba(47, 43, 42, 0.6);

  /* CREAM (Backgrounds) */
  --cream: rgba(247, 243, 238, 1);
  --cream-glass: rgba(247, 243, 238, 0.92);
  --linen: #efe7de;
  --white: #ffffff;

  /* SEMANTIC */
  --success: #6f8f72;
  --error: #b5534a;

  /* Typography */
  --font-display: 'Playfair Display', Georgia, serif;
  --font-body: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;

  /* Spacing & motion */
  --radius: 14px;
  --nav-height: 72px;
  --ease: cubic-bezier(0.22, 1, 0.36, 1);
}

/* === Base === */
*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
  margin: 0;
  background: var(--cream);
  color: var(--charcoal);
  font-family: var(--font-body);
  line-height: 1.6;
}

h1, h2, h3 { font-family: var(--font-display); font-weight: 500; }

a { color: inherit; }

.page { padding-top: var(--nav-height); }

.section-title { font-size: 2rem; margin: 0 0 0.5rem; text-align: center; }

.section-intro { color: var(--charcoal-soft); text-align: center; margin: 0 auto 2rem; max-width: 36rem; }

section { padding: 4rem 1.5rem; max-width: 1200px; margin: 0 auto; }

.sr-only {
  position: absolute;
  width: 1px;
  height: 1px;
  padding: 0;
  margin: -1px;
  overflow: hidden;
  clip: rect(0, 0, 0, 0);
  white-space: nowrap;
  border: 0;
}

/* === Navigation === */
.navigation {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--nav-height);
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0 1.5rem;
  background: var(--cream-glass);
  backdrop-filter: blur(12px);
  z-index: 100;
  transition: transform 0.3s var(--ease), box-shadow 0.3s var(--ease);
}

.navigation.elevated { box-shadow: 0 4px 24px rgba(47, 43, 42, 0.08); }

.navigation.nav-hidden { transform: translateY(-100%); }

.brand-mark {
  font-family: var(--font-display);
  font-size: 1.4rem;
  text-decoration: none;
  letter-spacing: 0.02em;
}

.menu-button {
  display: flex;
  flex-direction: column;
  gap: 5px;
  padding: 0.6rem;
  background: none;
  border: none;
  cursor: pointer;
}

.menu-bar {
  width: 22px;
  height: 2px;
  background: var(--charcoal);
  transition: transform 0.3s var(--ease), opacity 0.3s var(--ease);
}

.menu-button.open .menu-bar:nth-child(1) { transform: translateY(7px) rotate(45deg); }
.menu-button.open .menu-bar:nth-child(2) { opacity: 0; }
.menu-button.open .menu-bar:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }

.menu-dropdown {
  position: absolute;
  top: calc(var(--nav-height) - 8px);
  right: 1.5rem;
  display: flex;
  flex-direction: column;
  min-width: 200px;
  padding: 0.5rem;
  background: var(--white);
  border-radius: var(--radius);
  box-shadow: 0 12px 32px rgba(47, 43, 42, 0.12);
  opacity: 0;
  visibility: hidden;
  transform: translateY(-8px);
  transition: opacity 0.25s var(--ease), transform 0.25s var(--ease), visibility 0.25s;
}

.menu-dropdown.active { opacity: 1; visibility: visible; transform: translateY(0); }

.dropdown-link {
  padding: 0.7rem 1rem;
  border-radius: 10px;
  text-decoration: none;
}

.dropdown-link:hover { background: var(--blush-soft); }

.menu-backdrop { position: fixed; inset: 0; z-index: 90; }

/* === Hero === */
.hero {
  min-height: 80vh;
  display: grid;
  align-content: center;
  justify-items: center;
  gap: 1rem;
  padding: calc(var(--nav-height) + 3rem) 1.5rem 3rem;
  text-align: center;
}

.hero-eyebrow, .hero-headline, .hero-subtext, .hero-actions, .visual-gallery {
  opacity: 0;
  transform: translateY(24px);
  transition: opacity 0.8s var(--ease), transform 0.8s var(--ease);
}

.revealed { opacity: 1; transform: translateY(0); }

.hero-eyebrow { text-transform: uppercase; letter-spacing: 0.2em; color: var(--blush-deep); margin: 0; }

.hero-headline { font-size: clamp(2.8rem, 7vw, 5rem); margin: 0; }

.hero-subtext { max-width: 34rem; color: var(--charcoal-soft); margin: 0; }

.hero-actions { display: flex; gap: 1rem; flex-wrap: wrap; justify-content: center; }

.visual-gallery { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; width: min(900px, 100%); }

.gallery-item { aspect-ratio: 3 / 4; border-radius: var(--radius); background: var(--linen); }
.gallery-coast { background: linear-gradient(160deg, #e9dcd2, var(--blush)); }
.gallery-table { background: linear-gradient(160deg, var(--linen), #d9c8b8); }
.gallery-garden { background: linear-gradient(160deg, #dfe6d8, #b8c4ad); }

/* === Metrics === */
.metrics-strip {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
  gap: 1.5rem;
  text-align: center;
  padding-top: 1rem;
}

.metric-value { display: block; font-family: var(--font-display); font-size: 2.4rem; color: var(--blush-deep); }

.metric-value.floating { animation: floating 3s ease-in-out infinite; }

.metric-label { color: var(--charcoal-soft); font-size: 0.9rem; }

@keyframes floating {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-6px); }
}

/* === Buttons === */
.btn-primary, .btn-secondary, .btn-ghost {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem 1.4rem;
  border-radius: 999px;
  font: inherit;
  text-decoration: none;
  cursor: pointer;
  transition: background 0.2s, color 0.2s, border-color 0.2s;
}

.btn-primary { background: var(--charcoal); color: var(--cream); border: 1px solid var(--charcoal); }
.btn-primary:hover { background: var(--blush-deep); border-color: var(--blush-deep); }

.btn-secondary { background: transparent; color: var(--charcoal); border: 1px solid var(--charcoal); }
.btn-secondary:hover { background: var(--charcoal); color: var(--cream); }

.btn-ghost { background: none; border: 1px solid transparent; color: var(--charcoal-soft); }
.btn-ghost:hover { border-color: var(--blush); color: var(--charcoal); }

.copy-code-btn {
  display: inline-flex;
  align-items: center;
  justify-content: space-between;
  gap: 0.75rem;
  width: 100%;
  padding: 0.6rem 0.9rem;
  border: 1px dashed var(--blush-deep);
  border-radius: 10px;
  background: var(--blush-soft);
  font: inherit;
  cursor: pointer;
}

.copy-code-btn code { font-size: 1rem; letter-spacing: 0.08em; }

.copy-hint { font-size: 0.8rem; color: var(--charcoal-soft); }

.icon-btn {
  width: 40px;
  height: 40px;
  border-radius: 50%;
  border: 1px solid var(--linen);
  background: var(--white);
  font-size: 1.3rem;
  cursor: pointer;
}

button:disabled { opacity: 0.5; cursor: not-allowed; }

/* === Cards === */
.storefront-card, .partnership-card, .code-card {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  padding: 1.5rem;
  background: var(--white);
  border-radius: var(--radius);
  box-shadow: 0 6px 24px rgba(47, 43, 42, 0.06);
  transition: opacity 0.3s var(--ease), transform 0.3s var(--ease);
}

.hero-card { background: linear-gradient(150deg, var(--white), var(--blush-soft)); }

.featured-card { border: 1px solid var(--blush); }

.additional-card { background: var(--linen); }

.card-badge {
  align-self: flex-start;
  padding: 0.2rem 0.7rem;
  border-radius: 999px;
  background: var(--blush);
  color: var(--white);
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.08em;
}

.card-title { margin: 0; font-size: 1.3rem; }

.card-category { margin: 0; color: var(--blush-deep); font-size: 0.85rem; text-transform: uppercase; letter-spacing: 0.06em; }

.card-description { margin: 0; color: var(--charcoal-soft); flex: 1; }

.card-link { color: var(--charcoal); font-weight: 500; }

.filter-show { opacity: 1; transform: scale(1); }

.filter-hide { display: none; }

/* === Carousel === */
.carousel { display: flex; align-items: center; gap: 1rem; }

.carousel-track { flex: 1; }

.carousel-slide { display: none; }

.carousel-slide.active { display: block; animation: fade-in 0.4s var(--ease); }

.carousel-dots { display: flex; justify-content: center; gap: 0.5rem; padding: 1rem 0 0; }

.carousel-dot { width: 10px; height: 10px; border-radius: 50%; border: none; background: var(--linen); cursor: pointer; }

.carousel-dot.active { background: var(--blush-deep); }

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

/* === Partnerships === */
.partnership-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 1.5rem;
}

/* === Codes === */
.filter-bar { display: flex; flex-wrap: wrap; justify-content: center; gap: 0.5rem; }

.filter-btn {
  padding: 0.5rem 1.1rem;
  border: 1px solid var(--linen);
  border-radius: 999px;
  background: var(--white);
  font: inherit;
  cursor: pointer;
  transition: background 0.2s, color 0.2s, border-color 0.2s;
}

.filter-btn:hover { border-color: var(--blush); }

.filter-btn.active { background: var(--charcoal); border-color: var(--charcoal); color: var(--cream); }

.codes-toolbar {
  display: flex;
  justify-content: space-between;
  align-items: center;
  flex-wrap: wrap;
  gap: 1rem;
  margin: 1.5rem 0;
}

.results-count { margin: 0; color: var(--charcoal-soft); }

.sort-control select {
  margin-left: 0.4rem;
  padding: 0.4rem 0.8rem;
  border: 1px solid var(--linen);
  border-radius: 8px;
  background: var(--white);
  font: inherit;
}

.codes-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: 1.5rem;
}

.empty-state {
  padding: 3rem 1.5rem;
  text-align: center;
  border: 1px dashed var(--blush);
  border-radius: var(--radius);
  color: var(--charcoal-soft);
}

.empty-state-actions { display: flex; justify-content: center; gap: 0.75rem; flex-wrap: wrap; }

.show-more { display: flex; justify-content: center; padding-top: 2rem; }

/* === Highlights === */
.highlight-gallery { display: flex; gap: 1.5rem; justify-content: center; flex-wrap: wrap; }

.highlight-tile {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  background: none;
  border: none;
  font: inherit;
  cursor: pointer;
}

.highlight-cover {
  display: grid;
  place-items: center;
  width: 88px;
  height: 88px;
  border-radius: 50%;
  border: 2px solid var(--blush);
  background: var(--linen);
  font-family: var(--font-display);
  transition: transform 0.2s var(--ease);
}

.highlight-tile:hover .highlight-cover { transform: scale(1.05); }

.highlight-title { font-size: 0.9rem; }

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  display: grid;
  place-items: center;
  background: rgba(47, 43, 42, 0.45);
  z-index: 200;
  animation: fade-in 0.2s ease;
}

.highlight-modal {
  position: relative;
  width: min(420px, calc(100% - 2rem));
  padding: 2rem;
  background: var(--cream);
  border-radius: var(--radius);
  box-shadow: 0 24px 60px rgba(47, 43, 42, 0.25);
}

.highlight-modal .close-btn { position: absolute; top: 0.75rem; right: 0.75rem; }

.modal-title { margin-top: 0; }

.modal-description { color: var(--charcoal-soft); }

.modal-actions { display: flex; gap: 0.75rem; flex-wrap: wrap; }

/* === Toasts === */
.toast-stack {
  position: fixed;
  bottom: 1.5rem;
  right: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  z-index: 300;
}

.toast {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 0.8rem 1.1rem;
  border-radius: 10px;
  background: var(--charcoal);
  color: var(--cream);
  box-shadow: 0 10px 30px rgba(47, 43, 42, 0.2);
  animation: toast-in 0.3s var(--ease);
}

.toast-success { background: var(--success); }

.toast-error { background: var(--error); }

.toast-dismiss { background: none; border: none; color: inherit; font-size: 1.1rem; cursor: pointer; }

@keyframes toast-in {
  from { opacity: 0; transform: translateY(12px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Footer === */
.site-footer { padding: 3rem 1.5rem; text-align: center; color: var(--charcoal-muted); }

/* === Reduced motion === */
@media (prefers-reduced-motion: reduce) {
  html { scroll-behavior: auto; }
  *, *::before, *::after {
    animation-duration: 0.01ms !important;
    transition-duration: 0.01ms !important;
  }
  .hero-eyebrow, .hero-headline, .hero-subtext, .hero-actions, .visual-gallery {
    opacity: 1;
    transform: none;
  }
}

@media (max-width: 640px) {
  .visual-gallery { grid-template-columns: 1fr 1fr; }
  .codes-toolbar { flex-direction: column; align-items: flex-start; }
}
"#;
